//! Mindmap generation

use async_trait::async_trait;

use crate::models::{Mindmap, MindmapBranch, MindmapQuery};
use crate::services::ServiceError;

/// Turns a topic into a structured outline
#[async_trait]
pub trait MindmapGenerator: Send + Sync {
    /// Generate a mindmap centred on `query.source_text`
    async fn generate(&self, query: &MindmapQuery) -> Result<Mindmap, ServiceError>;
}

/// Generator that always produces the same three branches
#[derive(Debug, Default, Clone)]
pub struct MockMindmapGenerator;

fn branch(title: &str, subpoints: &[&str]) -> MindmapBranch {
    MindmapBranch {
        title: title.to_string(),
        subpoints: subpoints.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build the fixed mindmap, echoing source text and language
pub fn build_mindmap(query: &MindmapQuery) -> Mindmap {
    Mindmap {
        central: query.source_text.clone(),
        branches: vec![
            branch("Convenience", &["No queues", "Time saving", "Home delivery"]),
            branch("Variety", &["More options", "Easier comparison"]),
            branch("Price", &["Discounts", "Coupons"]),
        ],
        lang: query.lang.clone(),
    }
}

#[async_trait]
impl MindmapGenerator for MockMindmapGenerator {
    async fn generate(&self, query: &MindmapQuery) -> Result<Mindmap, ServiceError> {
        Ok(build_mindmap(query))
    }
}
