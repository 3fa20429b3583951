//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Loaded once at startup and never mutated afterwards.

use std::env;
use std::path::PathBuf;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Default request body limit (25 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Upload staging configuration
    pub uploads: UploadConfig,
    /// Question generation configuration
    pub questions: QuestionConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
        }
    }
}

/// Upload staging configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory where multipart files are staged for the lifetime of a request
    pub staging_dir: PathBuf,
    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
    /// Reject upload requests that carry no file part
    pub require_file: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            require_file: false,
        }
    }
}

/// Question generation configuration
#[derive(Debug, Clone, Default)]
pub struct QuestionConfig {
    /// Optional upper bound applied to the requested `count`, unbounded when unset
    pub max_fetch_count: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: parsed_var("PORT").unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
            },
            uploads: UploadConfig {
                staging_dir: env::var_os("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.uploads.staging_dir),
                max_upload_bytes: parsed_var("MAX_UPLOAD_BYTES")
                    .unwrap_or(defaults.uploads.max_upload_bytes),
                require_file: env::var("REQUIRE_UPLOAD_FILE")
                    .ok()
                    .and_then(|v| parse_flag(&v))
                    .unwrap_or(defaults.uploads.require_file),
            },
            questions: QuestionConfig {
                max_fetch_count: parsed_var("MAX_FETCH_COUNT")
                    .or(defaults.questions.max_fetch_count),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
