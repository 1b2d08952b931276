// Public API - what other modules can use
pub use handlers::summarize;
pub use service::{AudioSummary, GenerationService, DEFAULT_AUDIO_MIME_TYPE};

// Internal modules
mod handlers;
mod service;
pub mod types;
