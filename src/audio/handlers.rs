use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, instrument, warn};

use super::types::AudioUploadResponse;
use crate::generation::DEFAULT_AUDIO_MIME_TYPE;
use crate::shared::{AppError, AppState};

pub const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_FILENAME: &str = "recording.webm";

struct UploadedAudio {
    filename: String,
    mime_type: String,
    data: Vec<u8>,
}

/// Reads the `file` part, or the first part carrying a file name when there is none
async fn read_audio_part(multipart: &mut Multipart) -> Result<Option<UploadedAudio>, AppError> {
    let mut fallback = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let is_file_field = field.name() == Some("file");
        if !is_file_field && (fallback.is_some() || field.file_name().is_none()) {
            continue;
        }

        let filename = field.file_name().unwrap_or(DEFAULT_FILENAME).to_string();
        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_AUDIO_MIME_TYPE)
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        let upload = UploadedAudio {
            filename,
            mime_type,
            data: data.to_vec(),
        };
        if is_file_field {
            return Ok(Some(upload));
        }
        fallback = Some(upload);
    }

    Ok(fallback)
}

/// HTTP handler for summarizing a recorded voice contribution
///
/// POST /api/audio/upload (multipart)
#[instrument(name = "upload_audio", skip(state, multipart))]
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AudioUploadResponse>, AppError> {
    let upload = read_audio_part(&mut multipart).await?.ok_or_else(|| {
        warn!("Audio upload without a file part");
        AppError::BadRequest("No audio file provided".to_string())
    })?;

    if upload.data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    info!(
        filename = %upload.filename,
        mime_type = %upload.mime_type,
        size = upload.data.len(),
        "Processing audio upload"
    );

    let result = state
        .generation
        .summarize_audio(upload.data, &upload.mime_type)
        .await;

    Ok(Json(AudioUploadResponse {
        success: true,
        transcript: result.transcript,
        summary: result.summary,
        filename: upload.filename,
    }))
}
