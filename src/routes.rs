use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::shared::AppState;
use crate::{audio, generation, moderation, room, websockets};

async fn health() -> Json<Value> {
    Json(json!({ "message": "PrismEcho Backend is running" }))
}

/// CORS for the listed frontend origins, with credentials and mirrored methods/headers
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Builds the full HTTP + WebSocket router
pub fn build_router(app_state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/rooms", get(room::list_rooms))
        .route("/api/rooms/create", post(room::create_room))
        .route("/api/rooms/:room_id", get(room::get_room))
        .route("/api/moderate", post(moderation::moderate))
        .route("/api/summarize", post(generation::summarize))
        .route(
            "/api/audio/upload",
            post(audio::upload_audio).layer(DefaultBodyLimit::max(audio::MAX_AUDIO_UPLOAD_BYTES)),
        )
        .route("/ws/:client_id", get(websockets::websocket_handler))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
