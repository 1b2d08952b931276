use serde::{Deserialize, Serialize};

use super::models::RoomModel;

/// Request payload for creating a new room
#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub title: String,
    pub topic: String,
}

/// Response for room creation; failures carry `error`, successes the new id
/// and opening question. Absent values serialize as null.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateRoomResponse {
    pub success: bool,
    pub room_id: Option<String>,
    pub error: Option<String>,
    pub opening_question: Option<String>,
}

impl CreateRoomResponse {
    pub fn created(room_id: String, opening_question: String) -> Self {
        Self {
            success: true,
            room_id: Some(room_id),
            error: None,
            opening_question: Some(opening_question),
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            room_id: None,
            error: Some(error.into()),
            opening_question: None,
        }
    }
}

/// Response for listing rooms
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomModel>,
}
