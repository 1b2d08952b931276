use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::RoomModel,
    service::RoomService,
    types::{CreateRoomRequest, CreateRoomResponse, RoomListResponse},
};
use crate::shared::{AppError, AppState};

fn room_service(state: &AppState) -> RoomService {
    RoomService::new(
        Arc::clone(&state.room_repository),
        Arc::clone(&state.room_id_generator),
        state.moderation.clone(),
        state.generation.clone(),
    )
}

/// HTTP handler for creating a new debate room
///
/// POST /api/rooms/create
/// Validation and moderation failures are reported in the body with `success: false`
#[instrument(name = "create_room", skip(state, request))]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<Json<CreateRoomResponse>, AppError> {
    info!(title = %request.title, "Creating new room");

    let response = room_service(&state).create_room(request).await?;

    info!(
        success = response.success,
        room_id = ?response.room_id,
        "Room creation handled"
    );

    Ok(Json(response))
}

/// HTTP handler for listing all created rooms
///
/// GET /api/rooms
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<RoomListResponse>, AppError> {
    let rooms = room_service(&state).list_rooms().await?;

    info!(room_count = rooms.len(), "Rooms listed successfully");

    Ok(Json(RoomListResponse { rooms }))
}

/// HTTP handler for fetching a single room
///
/// GET /api/rooms/:room_id
/// Returns 404 when the id is neither a created room nor a preset
#[instrument(name = "get_room", skip(state))]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomModel>, AppError> {
    let room = room_service(&state).get_room(&room_id).await?;
    Ok(Json(room))
}
