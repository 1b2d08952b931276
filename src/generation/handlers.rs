use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::types::{SummarizeRequest, SummarizeResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for turning a transcript into bullet points
///
/// POST /api/summarize
#[instrument(name = "summarize", skip(state, request))]
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text must not be empty".to_string()));
    }

    let summary = state.generation.summarize_transcript(&request.text).await;

    info!(summary_length = summary.len(), "Transcript summarized");

    Ok(Json(SummarizeResponse { summary }))
}
