//! Upload staging
//!
//! Multipart files are written to a staging directory for the lifetime of
//! one request. A [`StagedUpload`] owns its file: [`StagedUpload::discard`]
//! deletes it once the handler is done, and `Drop` deletes it on every other
//! exit path (early `?` returns, panics, client disconnects).
//!
//! Deletion is best-effort. Failures are logged and never surface to clients.

use axum::body::Bytes;
use futures_util::{pin_mut, Stream, StreamExt};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::UploadedFile;

/// Longest file extension carried over from the client filename
const MAX_EXTENSION_LEN: usize = 10;

/// Writes uploads into the staging directory
#[derive(Debug, Clone)]
pub struct UploadStaging {
    dir: PathBuf,
}

impl UploadStaging {
    /// Create a stager rooted at `dir` (created lazily)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Staging directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stream `chunks` into a fresh file in the staging directory
    ///
    /// If the stream or a write fails, the partial file is removed before
    /// the error is returned.
    pub async fn stage<S, E>(
        &self,
        original_name: String,
        mime_type: String,
        chunks: S,
    ) -> Result<StagedUpload, AppError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Into<AppError>,
    {
        fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(staged_file_name(&original_name));
        // Guard first so it outlives the file handle below.
        let mut upload = StagedUpload::new(UploadedFile {
            original_name,
            mime_type,
            size_bytes: 0,
            path,
        });

        let mut file = fs::File::create(&upload.file.path).await?;
        pin_mut!(chunks);
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| -> AppError { e.into() })?;
            file.write_all(&chunk).await?;
            upload.file.size_bytes += chunk.len() as u64;
        }
        file.flush().await?;
        file.sync_all().await?;

        info!(
            original_name = %upload.file.original_name,
            path = %upload.file.path.display(),
            size_bytes = upload.file.size_bytes,
            "Staged uploaded file"
        );

        Ok(upload)
    }
}

/// Generate a collision-free name, keeping a sane extension from the client
fn staged_file_name(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|s| s.to_str())
        .filter(|e| {
            !e.is_empty()
                && e.len() <= MAX_EXTENSION_LEN
                && e.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or("bin");
    format!(
        "{}-{}.{}",
        Uuid::new_v4(),
        chrono::Utc::now().timestamp(),
        ext
    )
}

/// An uploaded file staged on disk, deleted when released or dropped
#[derive(Debug)]
pub struct StagedUpload {
    file: UploadedFile,
    released: bool,
}

impl StagedUpload {
    fn new(file: UploadedFile) -> Self {
        Self {
            file,
            released: false,
        }
    }

    /// The staged file and its metadata
    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    /// Delete the staged file
    pub async fn discard(mut self) {
        self.released = true;
        match fs::remove_file(&self.file.path).await {
            Ok(()) => debug!(path = %self.file.path.display(), "Removed staged upload"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.file.path.display(),
                error = %e,
                "Failed to cleanup staged upload"
            ),
        }
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        match std::fs::remove_file(&self.file.path) {
            Ok(()) => debug!(path = %self.file.path.display(), "Removed abandoned staged upload"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.file.path.display(),
                error = %e,
                "Failed to cleanup abandoned staged upload"
            ),
        }
    }
}

/// Discard an optional upload
pub async fn release(upload: Option<StagedUpload>) {
    if let Some(upload) = upload {
        upload.discard().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use tempfile::tempdir;

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = Result<Bytes, AppError>> {
        stream::iter(
            parts
                .iter()
                .map(|p| Ok(Bytes::from_static(*p)))
                .collect::<Vec<_>>(),
        )
    }

    fn entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_stage_writes_file_and_counts_bytes() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let staging = UploadStaging::new(temp_dir.path());

        let upload = staging
            .stage(
                "answer.webm".to_string(),
                "audio/webm".to_string(),
                chunks(&[b"hello ", b"world"]),
            )
            .await
            .expect("Failed to stage upload");

        let file = upload.file();
        assert_eq!(file.size_bytes, 11);
        assert_eq!(file.original_name, "answer.webm");
        assert_eq!(file.path.extension().unwrap(), "webm");
        assert_eq!(std::fs::read(&file.path).unwrap(), b"hello world");

        let path = file.path.clone();
        upload.discard().await;
        assert!(!path.exists());
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_stage_creates_missing_directory() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nested = temp_dir.path().join("a").join("b");
        let staging = UploadStaging::new(&nested);

        let upload = staging
            .stage("x.png".to_string(), "image/png".to_string(), chunks(&[b"x"]))
            .await
            .expect("Failed to stage upload");
        assert!(upload.file().path.starts_with(&nested));
        upload.discard().await;
    }

    #[tokio::test]
    async fn test_drop_removes_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let staging = UploadStaging::new(temp_dir.path());

        let upload = staging
            .stage("x.png".to_string(), "image/png".to_string(), chunks(&[b"x"]))
            .await
            .expect("Failed to stage upload");
        let path = upload.file().path.clone();
        assert!(path.exists());

        drop(upload);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_stream_error_removes_partial_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let staging = UploadStaging::new(temp_dir.path());

        let failing = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(AppError::Internal(anyhow::anyhow!("connection reset"))),
        ]);
        let result = staging
            .stage("x.wav".to_string(), "audio/wav".to_string(), failing)
            .await;

        assert!(result.is_err());
        assert_eq!(entries(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_discard_tolerates_missing_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let staging = UploadStaging::new(temp_dir.path());

        let upload = staging
            .stage("x.png".to_string(), "image/png".to_string(), chunks(&[b"x"]))
            .await
            .expect("Failed to stage upload");
        std::fs::remove_file(&upload.file().path).unwrap();

        // Must not panic or error
        upload.discard().await;
        release(None).await;
    }

    #[test]
    fn test_staged_file_name_sanitizes_extension() {
        assert!(staged_file_name("photo.JPG").ends_with(".JPG"));
        assert!(staged_file_name("../../etc/passwd").ends_with(".bin"));
        assert!(staged_file_name("noext").ends_with(".bin"));
        assert!(staged_file_name("weird.p/ng").ends_with(".bin"));
        assert!(!staged_file_name("../../evil.png").contains('/'));
    }
}
