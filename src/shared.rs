use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::ai::{AiClient, AiError, GeminiClient};
use crate::config::AppConfig;
use crate::generation::GenerationService;
use crate::moderation::{FailurePolicy, ModerationService};
use crate::room::generators::{RoomIdGenerator, UuidRoomIdGenerator};
use crate::room::repository::{InMemoryRoomRepository, RoomRepository};
use crate::websockets::{ConnectionManager, InMemoryConnectionManager};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub room_repository: Arc<dyn RoomRepository + Send + Sync>,
    pub room_id_generator: Arc<dyn RoomIdGenerator>,
    pub connection_manager: Arc<dyn ConnectionManager>,
    pub moderation: ModerationService,
    pub generation: GenerationService,
}

impl AppState {
    pub fn new(
        room_repository: Arc<dyn RoomRepository + Send + Sync>,
        room_id_generator: Arc<dyn RoomIdGenerator>,
        connection_manager: Arc<dyn ConnectionManager>,
        ai_client: Option<Arc<dyn AiClient>>,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            room_repository,
            room_id_generator,
            connection_manager,
            moderation: ModerationService::new(ai_client.clone(), failure_policy),
            generation: GenerationService::new(ai_client),
        }
    }

    /// Wires the in-memory stores and, when a credential is present, the Gemini client
    pub fn from_config(config: &AppConfig) -> Result<Self, AiError> {
        let ai_client: Option<Arc<dyn AiClient>> = match &config.gemini_api_key {
            Some(api_key) => {
                info!(model = %config.gemini_model, "Gemini client configured");
                Some(Arc::new(GeminiClient::new(
                    api_key.clone(),
                    config.gemini_model.clone(),
                    config.gemini_base_url.clone(),
                    config.ai_timeout,
                )?))
            }
            None => {
                warn!("GEMINI_API_KEY not found. AI moderation and generation are disabled.");
                None
            }
        };

        Ok(Self::new(
            Arc::new(InMemoryRoomRepository::new()),
            Arc::new(UuidRoomIdGenerator::new()),
            Arc::new(InMemoryConnectionManager::new()),
            ai_client,
            config.moderation_failure_policy,
        ))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::StorageError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
