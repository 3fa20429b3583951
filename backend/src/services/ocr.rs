//! Question extraction from uploaded images

use async_trait::async_trait;

use crate::models::{Exam, GeneratedBy, QuestionItem, UploadedFile};
use crate::services::questions::unique_id;
use crate::services::ServiceError;

/// Reads a question off a photographed cue card
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Extract a question from the staged image, if one was uploaded
    async fn extract_question(
        &self,
        image: Option<&UploadedFile>,
    ) -> Result<QuestionItem, ServiceError>;
}

/// OCR stand-in that always recognizes the same cue card
#[derive(Debug, Default, Clone)]
pub struct MockOcrEngine;

/// The question every mocked OCR run returns
pub fn recognized_question() -> QuestionItem {
    QuestionItem {
        id: unique_id("img", None),
        exam: Exam::Spm,
        part: "Part2".to_string(),
        title: "Talk about a family celebration you had recently".to_string(),
        prompts: vec![
            "What the event was?".to_string(),
            "What did you do there?".to_string(),
            "Why are family celebrations important in Malaysia?".to_string(),
        ],
        source: None,
        generated_by: GeneratedBy::OcrMock,
    }
}

#[async_trait]
impl OcrEngine for MockOcrEngine {
    async fn extract_question(
        &self,
        image: Option<&UploadedFile>,
    ) -> Result<QuestionItem, ServiceError> {
        if let Some(file) = image {
            tracing::debug!(
                original_name = %file.original_name,
                size_bytes = file.size_bytes,
                "Mock OCR ignoring image content"
            );
        }
        Ok(recognized_question())
    }
}
