//! API module
//!
//! HTTP routing and request handlers for the speaking-practice endpoints.

pub mod extract;
pub mod generate;
pub mod health;
pub mod middleware;
pub mod multipart;
pub mod practice;
pub mod questions;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.uploads.max_upload_bytes;

    Router::new()
        // Liveness and health
        .route("/", get(health::liveness))
        .route("/api/health", get(health::health_check))
        // Questions
        .route("/api/v1/questions/fetch", post(questions::fetch_questions))
        .route(
            "/api/v1/questions/upload-image",
            post(questions::upload_question_image),
        )
        // Practice
        .route(
            "/api/v1/practice/upload-audio",
            post(practice::upload_practice_audio),
        )
        // Generation
        .route("/api/v1/generate/mindmap", post(generate::generate_mindmap))
        .layer(DefaultBodyLimit::max(body_limit))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
