//! Uploaded file models

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A multipart file staged on disk for the duration of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename supplied by the client
    pub original_name: String,
    /// Content type supplied by the client
    pub mime_type: String,
    /// Number of bytes written to the staged file
    pub size_bytes: u64,
    /// Location of the staged file
    pub path: PathBuf,
}

impl UploadedFile {
    /// Client-visible metadata for this upload
    pub fn meta(&self) -> UploadedFileMeta {
        UploadedFileMeta {
            original_name: Some(self.original_name.clone()),
            mime_type: Some(self.mime_type.clone()),
            size_bytes: Some(self.size_bytes),
        }
    }
}

/// Upload metadata echoed back to clients
///
/// Serializes as `{}` when no file was uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFileMeta {
    /// Filename supplied by the client
    #[serde(rename = "originalname", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Content type supplied by the client
    #[serde(rename = "mimetype", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size of the upload in bytes
    #[serde(rename = "size", skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_meta_serializes_as_empty_object() {
        let value = serde_json::to_value(UploadedFileMeta::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_meta_uses_upload_wire_keys() {
        let file = UploadedFile {
            original_name: "answer.m4a".to_string(),
            mime_type: "audio/mp4".to_string(),
            size_bytes: 2048,
            path: PathBuf::from("uploads/abc.m4a"),
        };
        let value = serde_json::to_value(file.meta()).unwrap();
        assert_eq!(
            value,
            json!({"originalname": "answer.m4a", "mimetype": "audio/mp4", "size": 2048})
        );
    }
}
