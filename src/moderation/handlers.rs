use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::types::{ModerateRequest, ModerateResponse};
use crate::shared::AppState;

/// HTTP handler for checking arbitrary text
///
/// POST /api/moderate
#[instrument(name = "moderate", skip(state, request))]
pub async fn moderate(
    State(state): State<AppState>,
    Json(request): Json<ModerateRequest>,
) -> Json<ModerateResponse> {
    let verdict = state.moderation.moderate_content(&request.text).await;

    info!(is_safe = verdict.is_safe, "Moderation check completed");

    Json(ModerateResponse {
        is_safe: verdict.is_safe,
        reason: verdict.reason,
    })
}
