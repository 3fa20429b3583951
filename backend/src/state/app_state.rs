//! Shared application state
//!
//! Cloned into every request. Holds only immutable configuration and
//! stateless service handles, so no locking is needed.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    MindmapGenerator, MockMindmapGenerator, MockOcrEngine, MockQuestionBank, MockSpeechAssessor,
    OcrEngine, QuestionSource, SpeechAssessor, UploadStaging,
};

/// Main application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration fixed at startup
    pub config: Arc<Config>,
    /// Upload staging area
    pub staging: UploadStaging,
    /// Question source backing FetchQuestions
    pub questions: Arc<dyn QuestionSource>,
    /// OCR backing UploadQuestionImage
    pub ocr: Arc<dyn OcrEngine>,
    /// Assessor backing UploadPracticeAudio
    pub speech: Arc<dyn SpeechAssessor>,
    /// Generator backing GenerateMindmap
    pub mindmaps: Arc<dyn MindmapGenerator>,
}

impl AppState {
    /// Create state wired to the mock services
    pub fn new(config: Config) -> Self {
        Self {
            staging: UploadStaging::new(config.uploads.staging_dir.clone()),
            config: Arc::new(config),
            questions: Arc::new(MockQuestionBank),
            ocr: Arc::new(MockOcrEngine),
            speech: Arc::new(MockSpeechAssessor),
            mindmaps: Arc::new(MockMindmapGenerator),
        }
    }

    /// Replace the question source
    pub fn with_question_source(mut self, questions: Arc<dyn QuestionSource>) -> Self {
        self.questions = questions;
        self
    }

    /// Replace the OCR engine
    pub fn with_ocr(mut self, ocr: Arc<dyn OcrEngine>) -> Self {
        self.ocr = ocr;
        self
    }

    /// Replace the speech assessor
    pub fn with_speech_assessor(mut self, speech: Arc<dyn SpeechAssessor>) -> Self {
        self.speech = speech;
        self
    }

    /// Replace the mindmap generator
    pub fn with_mindmap_generator(mut self, mindmaps: Arc<dyn MindmapGenerator>) -> Self {
        self.mindmaps = mindmaps;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("staging", &self.staging)
            .finish_non_exhaustive()
    }
}
