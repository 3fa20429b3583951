//! Service layer for business logic
//!
//! Each backing capability (question sourcing, OCR, speech assessment,
//! mindmap generation) sits behind a trait so a real implementation can
//! replace the mock without touching the HTTP handlers.

pub mod error;
pub mod mindmap;
pub mod ocr;
pub mod questions;
pub mod speech;
pub mod staging;

pub use error::ServiceError;
pub use mindmap::{MindmapGenerator, MockMindmapGenerator};
pub use ocr::{MockOcrEngine, OcrEngine};
pub use questions::{MockQuestionBank, QuestionSource};
pub use speech::{MockSpeechAssessor, SpeechAssessor};
pub use staging::{StagedUpload, UploadStaging};
