//! Question API handlers
//!
//! POST /api/v1/questions/fetch and POST /api/v1/questions/upload-image

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::extract::{coerce_count, coerce_string, LenientJson};
use crate::api::multipart::read_upload;
use crate::error::AppError;
use crate::models::{Exam, FetchMode, QuestionItem, QuestionQuery};
use crate::services::staging::release;
use crate::services::StagedUpload;
use crate::state::AppState;

/// Multipart field carrying the question image
pub const IMAGE_FIELD: &str = "image";

/// Raw FetchQuestions body, before normalization
#[derive(Debug, Default, Deserialize)]
pub struct FetchQuestionsBody {
    /// Exam name, default `SPM`
    #[serde(default)]
    pub exam: Option<Value>,
    /// `ai` or `web`, default `ai`
    #[serde(default)]
    pub mode: Option<Value>,
    /// Number of questions, default 1
    #[serde(default)]
    pub count: Option<Value>,
}

impl FetchQuestionsBody {
    /// Apply defaults and coercions, capping `count` at `max_count` when set
    pub fn normalize(&self, max_count: Option<usize>) -> QuestionQuery {
        let defaults = QuestionQuery::default();
        let exam = Exam::from(coerce_string(self.exam.as_ref(), defaults.exam.as_str()));
        let mode = FetchMode::from(coerce_string(self.mode.as_ref(), "ai").as_str());

        let requested = coerce_count(self.count.as_ref(), defaults.count);
        let count = match max_count {
            Some(max) if requested > max => {
                warn!(requested, max, "Capped question count");
                max
            }
            _ => requested,
        };

        QuestionQuery { exam, mode, count }
    }
}

/// Response for FetchQuestions
#[derive(Debug, Serialize)]
pub struct FetchQuestionsResponse {
    /// Questions in index order
    pub items: Vec<QuestionItem>,
}

/// Response for UploadQuestionImage
#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    /// The recognized question
    pub item: QuestionItem,
}

/// POST /api/v1/questions/fetch - Generate exam questions
pub async fn fetch_questions(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<FetchQuestionsBody>,
) -> Result<Json<FetchQuestionsResponse>, AppError> {
    let query = body.normalize(state.config.questions.max_fetch_count);
    let items = state.questions.fetch(&query).await?;

    info!(
        exam = %query.exam,
        mode = ?query.mode,
        count = items.len(),
        "Fetched questions"
    );

    Ok(Json(FetchQuestionsResponse { items }))
}

/// POST /api/v1/questions/upload-image - Recognize a question from a photo
///
/// The staged image is deleted before the response is built, whether or not
/// recognition succeeded.
pub async fn upload_question_image(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<UploadImageResponse>, AppError> {
    let upload = read_upload(
        multipart,
        &state.staging,
        IMAGE_FIELD,
        state.config.uploads.require_file,
    )
    .await?;

    let result = state
        .ocr
        .extract_question(upload.as_ref().map(StagedUpload::file))
        .await;

    // Cleanup after processing (whether success or failure)
    release(upload).await;

    Ok(Json(UploadImageResponse { item: result? }))
}
