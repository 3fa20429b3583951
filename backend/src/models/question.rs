//! Exam question models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exam a question targets
///
/// Known exams are matched case-insensitively and echoed in canonical form.
/// Anything else is kept verbatim so it can be echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Exam {
    /// Sijil Pelajaran Malaysia
    #[default]
    Spm,
    /// Test of English as a Foreign Language
    Toefl,
    /// International English Language Testing System
    Ielts,
    /// Unrecognized exam name
    Other(String),
}

impl Exam {
    /// Get the wire representation of the exam
    pub fn as_str(&self) -> &str {
        match self {
            Exam::Spm => "SPM",
            Exam::Toefl => "TOEFL",
            Exam::Ielts => "IELTS",
            Exam::Other(name) => name,
        }
    }
}

impl From<&str> for Exam {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPM" => Exam::Spm,
            "TOEFL" => Exam::Toefl,
            "IELTS" => Exam::Ielts,
            _ => Exam::Other(s.to_string()),
        }
    }
}

impl From<String> for Exam {
    fn from(s: String) -> Self {
        Exam::from(s.as_str())
    }
}

impl From<Exam> for String {
    fn from(exam: Exam) -> Self {
        exam.as_str().to_string()
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How fetched questions are sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Generated by a language model
    #[default]
    Ai,
    /// Scraped from the web
    Web,
}

impl From<&str> for FetchMode {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("web") {
            FetchMode::Web
        } else {
            FetchMode::Ai
        }
    }
}

/// Which pipeline produced a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratedBy {
    /// Language model generation
    Ai,
    /// Web retrieval
    Web,
    /// Mocked OCR of an uploaded image
    OcrMock,
}

impl From<FetchMode> for GeneratedBy {
    fn from(mode: FetchMode) -> Self {
        match mode {
            FetchMode::Ai => GeneratedBy::Ai,
            FetchMode::Web => GeneratedBy::Web,
        }
    }
}

/// A single speaking question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    /// Identifier, unique within one fetch batch
    pub id: String,
    /// Exam the question belongs to
    pub exam: Exam,
    /// Exam section label, e.g. `Part2`
    pub part: String,
    /// Question headline shown on the cue card
    pub title: String,
    /// Cue-card prompts in display order
    pub prompts: Vec<String>,
    /// Where the question came from, when retrieved from the web
    pub source: Option<String>,
    /// Pipeline that produced the question
    pub generated_by: GeneratedBy,
}

/// Normalized FetchQuestions request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    /// Exam to draw the template from
    pub exam: Exam,
    /// Sourcing mode
    pub mode: FetchMode,
    /// Number of items to produce
    pub count: usize,
}

impl Default for QuestionQuery {
    fn default() -> Self {
        Self {
            exam: Exam::default(),
            mode: FetchMode::default(),
            count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_parsing_is_case_insensitive() {
        assert_eq!(Exam::from("spm"), Exam::Spm);
        assert_eq!(Exam::from(" Toefl "), Exam::Toefl);
        assert_eq!(Exam::from("IELTS"), Exam::Ielts);
        assert_eq!(Exam::from("MUET"), Exam::Other("MUET".to_string()));
    }

    #[test]
    fn test_exam_serializes_as_string() {
        assert_eq!(serde_json::to_value(Exam::Toefl).unwrap(), "TOEFL");
        assert_eq!(
            serde_json::to_value(Exam::Other("Cambridge B2".to_string())).unwrap(),
            "Cambridge B2"
        );
        let exam: Exam = serde_json::from_str("\"ielts\"").unwrap();
        assert_eq!(exam, Exam::Ielts);
    }

    #[test]
    fn test_fetch_mode_only_recognizes_web() {
        assert_eq!(FetchMode::from("web"), FetchMode::Web);
        assert_eq!(FetchMode::from("WEB"), FetchMode::Web);
        assert_eq!(FetchMode::from("ai"), FetchMode::Ai);
        assert_eq!(FetchMode::from("scrape"), FetchMode::Ai);
    }

    #[test]
    fn test_generated_by_wire_names() {
        assert_eq!(serde_json::to_value(GeneratedBy::Ai).unwrap(), "ai");
        assert_eq!(serde_json::to_value(GeneratedBy::Web).unwrap(), "web");
        assert_eq!(serde_json::to_value(GeneratedBy::OcrMock).unwrap(), "ocr-mock");
    }
}
