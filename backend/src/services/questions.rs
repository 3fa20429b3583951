//! Question sourcing
//!
//! The mock question bank fills every item from a fixed template chosen by
//! exam. Unknown exams use the fallback template.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{Exam, FetchMode, GeneratedBy, QuestionItem, QuestionQuery};
use crate::services::ServiceError;

/// Placeholder source URL attached to web-mode questions
pub const WEB_SOURCE_URL: &str = "https://example.com/sample-question";

/// Static content for one exam's questions
#[derive(Debug, PartialEq, Eq)]
pub struct QuestionTemplate {
    /// Exam section label
    pub part: &'static str,
    /// Question headline
    pub title: &'static str,
    /// Cue-card prompts
    pub prompts: &'static [&'static str],
}

const SPM_TEMPLATE: QuestionTemplate = QuestionTemplate {
    part: "Part2",
    title: "Talk about a person you admire",
    prompts: &[
        "Who is this person?",
        "What do they do?",
        "Why do you admire them?",
    ],
};

const TOEFL_TEMPLATE: QuestionTemplate = QuestionTemplate {
    part: "Task1",
    title: "Do you prefer studying alone or with others?",
    prompts: &[
        "Which do you prefer?",
        "What are the main advantages of your choice?",
        "Give an example from your own experience.",
    ],
};

const FALLBACK_TEMPLATE: QuestionTemplate = QuestionTemplate {
    part: "Part2",
    title: "Describe a memorable event",
    prompts: &[
        "What was the event?",
        "When and where did it happen?",
        "Why was it memorable to you?",
    ],
};

/// Look up the template for an exam
pub fn template_for(exam: &Exam) -> &'static QuestionTemplate {
    match exam {
        Exam::Spm => &SPM_TEMPLATE,
        Exam::Toefl => &TOEFL_TEMPLATE,
        Exam::Ielts | Exam::Other(_) => &FALLBACK_TEMPLATE,
    }
}

/// Build an identifier of the form `{prefix}-{unix_millis}[-{index}]-{hex8}`
///
/// The index keeps ids distinct inside a batch; the random suffix keeps them
/// distinct across calls landing in the same millisecond.
pub fn unique_id(prefix: &str, index: Option<usize>) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    match index {
        Some(i) => format!("{}-{}-{}-{}", prefix, millis, i, &suffix[..8]),
        None => format!("{}-{}-{}", prefix, millis, &suffix[..8]),
    }
}

/// Produce `query.count` questions in index order
pub fn build_questions(query: &QuestionQuery) -> Vec<QuestionItem> {
    let template = template_for(&query.exam);
    let source = match query.mode {
        FetchMode::Web => Some(WEB_SOURCE_URL.to_string()),
        FetchMode::Ai => None,
    };

    (0..query.count)
        .map(|i| QuestionItem {
            id: unique_id("q", Some(i)),
            exam: query.exam.clone(),
            part: template.part.to_string(),
            title: template.title.to_string(),
            prompts: template.prompts.iter().map(|p| p.to_string()).collect(),
            source: source.clone(),
            generated_by: GeneratedBy::from(query.mode),
        })
        .collect()
}

/// Source of exam questions
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch exactly `query.count` questions
    async fn fetch(&self, query: &QuestionQuery) -> Result<Vec<QuestionItem>, ServiceError>;
}

/// Template-backed question source
#[derive(Debug, Default, Clone)]
pub struct MockQuestionBank;

#[async_trait]
impl QuestionSource for MockQuestionBank {
    async fn fetch(&self, query: &QuestionQuery) -> Result<Vec<QuestionItem>, ServiceError> {
        Ok(build_questions(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn query(exam: &str, mode: FetchMode, count: usize) -> QuestionQuery {
        QuestionQuery {
            exam: Exam::from(exam),
            mode,
            count,
        }
    }

    #[test]
    fn test_build_returns_requested_count_with_unique_ids() {
        let items = build_questions(&query("SPM", FetchMode::Ai, 50));
        assert_eq!(items.len(), 50);

        let ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 50, "ids must be pairwise unique");
    }

    #[test]
    fn test_build_preserves_index_order() {
        let items = build_questions(&query("SPM", FetchMode::Ai, 3));
        for (i, item) in items.iter().enumerate() {
            let index: usize = item
                .id
                .split('-')
                .nth(2)
                .and_then(|s| s.parse().ok())
                .expect("id should embed the batch index");
            assert_eq!(index, i);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(build_questions(&query("SPM", FetchMode::Ai, 0)).is_empty());
    }

    #[test]
    fn test_toefl_web_example() {
        let items = build_questions(&query("TOEFL", FetchMode::Web, 2));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].part, "Task1");
        assert_eq!(items[0].exam, Exam::Toefl);
        assert_eq!(items[0].source.as_deref(), Some(WEB_SOURCE_URL));
        assert_eq!(items[0].generated_by, GeneratedBy::Web);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_ai_mode_has_no_source() {
        let items = build_questions(&query("SPM", FetchMode::Ai, 2));
        assert!(items.iter().all(|i| i.source.is_none()));
        assert!(items.iter().all(|i| i.generated_by == GeneratedBy::Ai));
    }

    #[test]
    fn test_unknown_exam_uses_fallback() {
        let items = build_questions(&query("DELF", FetchMode::Ai, 1));
        assert_eq!(items[0].exam.as_str(), "DELF");
        assert_eq!(items[0].title, FALLBACK_TEMPLATE.title);
        assert_eq!(template_for(&Exam::Ielts), &FALLBACK_TEMPLATE);
    }

    #[test]
    fn test_spm_template() {
        let items = build_questions(&query("spm", FetchMode::Ai, 1));
        assert_eq!(items[0].part, "Part2");
        assert_eq!(items[0].title, "Talk about a person you admire");
        assert_eq!(items[0].prompts.len(), 3);
    }

    #[test]
    fn test_unique_id_format() {
        let id = unique_id("img", None);
        assert!(id.starts_with("img-"));
        assert_eq!(id.split('-').count(), 3);
        assert_ne!(unique_id("q", Some(0)), unique_id("q", Some(0)));
    }

    #[tokio::test]
    async fn test_mock_bank_fetch() {
        let items = MockQuestionBank
            .fetch(&QuestionQuery::default())
            .await
            .expect("mock bank never fails");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].exam, Exam::Spm);
    }
}
