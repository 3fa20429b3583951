//! Data-transfer types
//!
//! Shapes exchanged with clients and with the backing services.
//! Nothing here is persisted.

pub mod mindmap;
pub mod question;
pub mod report;
pub mod upload;

pub use mindmap::{Mindmap, MindmapBranch, MindmapQuery};
pub use question::{Exam, FetchMode, GeneratedBy, QuestionItem, QuestionQuery};
pub use report::{GrammarIssue, PracticeReport, Score, Scores};
pub use upload::{UploadedFile, UploadedFileMeta};
