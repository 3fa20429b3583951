//! Mindmap models

use serde::{Deserialize, Serialize};

/// Topic used when the client sends none
pub const DEFAULT_SOURCE_TEXT: &str = "Why people shop online";

/// Language used when the client sends none
pub const DEFAULT_LANG: &str = "en";

/// One labeled branch of a mindmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapBranch {
    /// Branch label
    pub title: String,
    /// Sub-points in display order
    pub subpoints: Vec<String>,
}

/// A central topic with ordered branches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mindmap {
    /// Central topic, echoed from the source text
    pub central: String,
    /// Branches in display order
    pub branches: Vec<MindmapBranch>,
    /// Output language, echoed from the request
    pub lang: String,
}

/// Normalized GenerateMindmap request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindmapQuery {
    /// Text the mindmap is generated from
    pub source_text: String,
    /// Output language
    pub lang: String,
}

impl Default for MindmapQuery {
    fn default() -> Self {
        Self {
            source_text: DEFAULT_SOURCE_TEXT.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}
