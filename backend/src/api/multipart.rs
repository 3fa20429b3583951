//! Multipart upload handling
//!
//! Pulls one named file part out of a multipart body into the staging area.

use axum::extract::Multipart;
use tracing::{info, warn};

use crate::error::AppError;
use crate::services::{StagedUpload, UploadStaging};

/// Content type recorded when the client sends none
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Stage the first file part named `field_name`
///
/// Other parts, and repeated parts with the same name, are skipped. A request
/// that is not multipart at all counts as carrying no file. When
/// `require_file` is set, a missing file is a [`AppError::MissingFile`].
///
/// If reading the body fails after a file was staged, the staged file is
/// removed before the error is returned.
pub async fn read_upload(
    multipart: Option<Multipart>,
    staging: &UploadStaging,
    field_name: &str,
    require_file: bool,
) -> Result<Option<StagedUpload>, AppError> {
    let mut staged: Option<StagedUpload> = None;

    if let Some(mut multipart) = multipart {
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field
                .file_name()
                .filter(|n| !n.is_empty())
                .map(str::to_string);

            match file_name {
                Some(original_name) if name == field_name && staged.is_none() => {
                    let mime_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_MIME_TYPE)
                        .to_string();
                    staged = Some(staging.stage(original_name, mime_type, field).await?);
                }
                _ => {
                    warn!(field = %name, expected = %field_name, "Skipping multipart field");
                }
            }
        }
    }

    if staged.is_none() {
        if require_file {
            return Err(AppError::MissingFile(field_name.to_string()));
        }
        info!(field = %field_name, "No file uploaded, continuing without one");
    }

    Ok(staged)
}
