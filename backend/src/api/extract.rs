//! Request extraction helpers
//!
//! JSON bodies are read leniently: an empty body, invalid JSON or a
//! top-level non-object becomes the body type's `Default`. Field-level
//! coercion happens afterwards in each body's `normalize`.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// JSON body extractor that falls back to `T::default()` instead of rejecting
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(LenientJson(parse_lenient(&bytes)))
    }
}

/// Parse `bytes` as JSON, falling back to `T::default()`
pub fn parse_lenient<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed JSON body, using defaults");
            T::default()
        }
    }
}

/// Coerce a JSON value into text
///
/// Strings pass through unchanged (including empty ones), numbers and
/// booleans are stringified, anything else yields `default`.
pub fn coerce_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

/// Coerce a JSON value into a non-negative count
///
/// Missing or null yields `default`. Numbers and numeric strings truncate
/// toward zero. Booleans count as 1 and 0. Negative, non-numeric and
/// non-scalar values yield 0.
pub fn coerce_count(value: Option<&Value>, default: usize) -> usize {
    let number = match value {
        None | Some(Value::Null) => return default,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(u) => return usize::try_from(u).unwrap_or(usize::MAX),
            None => n.as_f64(),
        },
        Some(Value::Bool(b)) => return usize::from(*b),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(f) if f.is_finite() && f > 0.0 => f.trunc() as usize,
        _ => 0,
    }
}
