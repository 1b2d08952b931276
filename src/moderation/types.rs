use serde::{Deserialize, Serialize};

/// Request payload for a standalone moderation check
#[derive(Debug, Deserialize)]
pub struct ModerateRequest {
    pub text: String,
}

/// Response for a moderation check; `reason` is null when the text is safe
#[derive(Debug, Serialize, Deserialize)]
pub struct ModerateResponse {
    pub is_safe: bool,
    pub reason: Option<String>,
}
