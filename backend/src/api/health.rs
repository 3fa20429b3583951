//! Liveness and health endpoints

use axum::Json;
use serde::Serialize;

/// Plain-text body served on `GET /`
pub const LIVENESS_MESSAGE: &str = "Speaking Practice Backend (mock) is running.";

#[allow(missing_docs)]
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

/// GET / - Liveness string
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /api/health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}
