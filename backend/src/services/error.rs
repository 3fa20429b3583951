//! Service-specific error types
//!
//! Errors a backing service (question source, OCR, speech assessment,
//! mindmap generation) can report. The mock implementations never fail.

use thiserror::Error;

/// Errors that can occur inside a backing service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service is not reachable or not configured
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
