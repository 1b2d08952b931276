use serde::{Deserialize, Serialize};

/// Request payload for summarizing a spoken contribution's transcript
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
