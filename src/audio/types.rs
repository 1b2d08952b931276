use serde::{Deserialize, Serialize};

/// Response for an audio upload; `transcript` is always empty
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioUploadResponse {
    pub success: bool,
    pub transcript: String,
    pub summary: String,
    pub filename: String,
}
