// Public API - what other modules can use
pub use handlers::moderate;
pub use service::{FailurePolicy, ModerationService, ModerationVerdict};

// Internal modules
mod blocklist;
mod handlers;
mod service;
pub mod types;
