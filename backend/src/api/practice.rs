//! Practice API handlers
//!
//! POST /api/v1/practice/upload-audio

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::api::multipart::read_upload;
use crate::error::AppError;
use crate::models::{PracticeReport, UploadedFileMeta};
use crate::services::staging::release;
use crate::services::StagedUpload;
use crate::state::AppState;

/// Multipart field carrying the recorded answer
pub const AUDIO_FIELD: &str = "audio";

/// Response for UploadPracticeAudio
#[derive(Debug, Serialize)]
pub struct UploadAudioResponse {
    /// Assessment of the recording
    pub report: PracticeReport,
    /// Metadata of the uploaded file, `{}` when none was sent
    pub audio: UploadedFileMeta,
}

/// POST /api/v1/practice/upload-audio - Transcribe and score a recorded answer
pub async fn upload_practice_audio(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<UploadAudioResponse>, AppError> {
    let upload = read_upload(
        multipart,
        &state.staging,
        AUDIO_FIELD,
        state.config.uploads.require_file,
    )
    .await?;

    let audio = upload
        .as_ref()
        .map(|u| u.file().meta())
        .unwrap_or_default();

    let result = state
        .speech
        .assess(upload.as_ref().map(StagedUpload::file))
        .await;

    // Cleanup after processing (whether success or failure)
    release(upload).await;

    let report = result?;
    info!(
        transcript_len = report.transcript.len(),
        overall = report.scores.overall_percent.value(),
        "Assessed practice audio"
    );

    Ok(Json(UploadAudioResponse { report, audio }))
}
