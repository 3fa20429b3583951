//! Generation API handlers
//!
//! POST /api/v1/generate/mindmap

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::extract::{coerce_string, LenientJson};
use crate::error::AppError;
use crate::models::mindmap::{DEFAULT_LANG, DEFAULT_SOURCE_TEXT};
use crate::models::{Mindmap, MindmapQuery};
use crate::state::AppState;

/// Raw GenerateMindmap body, before normalization
#[derive(Debug, Default, Deserialize)]
pub struct MindmapBody {
    /// Topic text, default "Why people shop online"
    #[serde(default)]
    pub source_text: Option<Value>,
    /// Output language, default `en`
    #[serde(default)]
    pub lang: Option<Value>,
}

impl MindmapBody {
    /// Apply defaults and coercions
    pub fn normalize(&self) -> MindmapQuery {
        MindmapQuery {
            source_text: coerce_string(self.source_text.as_ref(), DEFAULT_SOURCE_TEXT),
            lang: coerce_string(self.lang.as_ref(), DEFAULT_LANG),
        }
    }
}

/// Response for GenerateMindmap
#[derive(Debug, Serialize)]
pub struct MindmapResponse {
    /// Generated outline
    pub mindmap: Mindmap,
    /// Rendered diagram; always null until a renderer exists
    pub svg: Option<String>,
}

/// POST /api/v1/generate/mindmap - Outline a topic as a mindmap
pub async fn generate_mindmap(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<MindmapBody>,
) -> Result<Json<MindmapResponse>, AppError> {
    let query = body.normalize();
    let mindmap = state.mindmaps.generate(&query).await?;

    Ok(Json(MindmapResponse { mindmap, svg: None }))
}
