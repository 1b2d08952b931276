// Library crate for the PrismEcho debate room server
// This file exposes the public API for the binary and integration tests

pub mod ai;
pub mod audio;
pub mod config;
pub mod generation;
pub mod moderation;
pub mod room;
pub mod routes;
pub mod shared;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use ai::{AiClient, AiError, GenerationRequest};
pub use config::AppConfig;
pub use moderation::{FailurePolicy, ModerationService, ModerationVerdict};
pub use room::{models::RoomModel, repository::RoomRepository};
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use websockets::{ConnectionManager, InMemoryConnectionManager};
