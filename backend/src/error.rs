//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message returned to clients for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error types
///
/// Malformed JSON input never reaches this type: request bodies are normalized
/// to defaults instead of being rejected.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upload request carried no file under the expected field name
    #[error("Missing file: {0}")]
    MissingFile(String),

    /// Multipart body could not be read (malformed, or over the body limit)
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Staging an uploaded file on disk failed
    #[error("Upload staging failed: {0}")]
    Staging(#[from] std::io::Error),

    /// A backing service (OCR, speech, generation) failed
    #[error("Service error: {0}")]
    Service(#[from] crate::services::ServiceError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::Staging(_) | AppError::Service(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    #[test]
    fn test_missing_file_is_bad_request() {
        let err = AppError::MissingFile("image".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing file: image");
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let io = AppError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "/secret/uploads",
        ));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let service = AppError::from(ServiceError::Unavailable("ocr".to_string()));
        assert_eq!(service.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_server_error_response_hides_detail() {
        let response = AppError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "/secret/uploads/abc.bin",
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("Body is not JSON");
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(json["status"], 500);
        assert!(!String::from_utf8_lossy(&body).contains("secret"));
    }

    #[tokio::test]
    async fn test_client_error_response_keeps_message() {
        let response = AppError::MissingFile("audio".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("Body is not JSON");
        assert_eq!(json["error"], "Missing file: audio");
    }
}
