//! Speech assessment of recorded answers
//!
//! A real implementation would chain speech-to-text with grammar and
//! pronunciation scoring. The mock returns one fixed report.

use async_trait::async_trait;

use crate::models::{GrammarIssue, PracticeReport, Score, Scores, UploadedFile};
use crate::services::ServiceError;

/// Transcribes and scores a recorded practice answer
#[async_trait]
pub trait SpeechAssessor: Send + Sync {
    /// Assess the staged audio, if one was uploaded
    async fn assess(&self, audio: Option<&UploadedFile>) -> Result<PracticeReport, ServiceError>;
}

/// Assessor that returns the same report for any input
#[derive(Debug, Default, Clone)]
pub struct MockSpeechAssessor;

/// The fixed report returned for every recording
pub fn sample_report() -> PracticeReport {
    PracticeReport {
        transcript: "I admire my grandmother because she was very kind and always help us."
            .to_string(),
        grammar_issues: vec![GrammarIssue {
            error: "was very kind".to_string(),
            fix: "is/has been very kind (use present/past consistently depending on context)"
                .to_string(),
        }],
        scores: Scores {
            fluency: Score::new(72),
            grammar: Score::new(68),
            vocabulary: Score::new(70),
            pronunciation: Score::new(65),
            overall_percent: Score::new(69),
        },
        suggestions: vec![
            "Reduce pauses by practicing chunks of speech.".to_string(),
            "Use consistent verb tenses and varied sentence structures.".to_string(),
            "Try shadowing the model answer to improve pronunciation.".to_string(),
        ],
    }
}

#[async_trait]
impl SpeechAssessor for MockSpeechAssessor {
    async fn assess(&self, _audio: Option<&UploadedFile>) -> Result<PracticeReport, ServiceError> {
        Ok(sample_report())
    }
}
