// Public API - what other modules can use
pub use handlers::{upload_audio, MAX_AUDIO_UPLOAD_BYTES};

// Internal modules
mod handlers;
pub mod types;
