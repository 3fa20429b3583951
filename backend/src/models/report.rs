//! Practice report models

use serde::{Deserialize, Serialize};

/// Highest value a score can take
pub const MAX_SCORE: u8 = 100;

/// A percentage score, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Create a score, clamping values above 100
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    /// Get the numeric value
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// A grammar mistake found in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    /// The offending phrase
    pub error: String,
    /// Suggested correction
    pub fix: String,
}

/// Named assessment metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Fluency score
    pub fluency: Score,
    /// Grammar score
    pub grammar: Score,
    /// Vocabulary score
    pub vocabulary: Score,
    /// Pronunciation score
    pub pronunciation: Score,
    /// Overall score
    pub overall_percent: Score,
}

/// Assessment of one recorded practice answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeReport {
    /// Speech-to-text output
    pub transcript: String,
    /// Grammar issues in transcript order
    #[serde(rename = "grammarIssues")]
    pub grammar_issues: Vec<GrammarIssue>,
    /// Metric scores
    pub scores: Scores,
    /// Improvement tips
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_to_100() {
        assert_eq!(Score::new(72).value(), 72);
        assert_eq!(Score::new(250).value(), 100);
        let score: Score = serde_json::from_str("180").unwrap();
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn test_grammar_issues_key_is_camel_case() {
        let report = PracticeReport {
            transcript: String::new(),
            grammar_issues: vec![],
            scores: Scores {
                fluency: Score::new(1),
                grammar: Score::new(2),
                vocabulary: Score::new(3),
                pronunciation: Score::new(4),
                overall_percent: Score::new(5),
            },
            suggestions: vec![],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("grammarIssues").is_some());
        assert_eq!(value["scores"]["overall_percent"], 5);
    }
}
