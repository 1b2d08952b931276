use async_trait::async_trait;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Reasoning budget hint forwarded to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThinkingLevel {
    Low,
    High,
}

/// Binary payload sent alongside the prompt (e.g. recorded audio)
#[derive(Debug, Clone)]
pub struct InlineData {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// A single prompt/response round trip to the generative model
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub inline_data: Option<InlineData>,
    pub temperature: f32,
    pub thinking_level: ThinkingLevel,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            inline_data: None,
            temperature,
            thinking_level: ThinkingLevel::Low,
        }
    }

    pub fn with_inline_data(mut self, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.inline_data = Some(InlineData {
            mime_type: mime_type.into(),
            data,
        });
        self
    }
}

#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider returned no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        AiError::Http(e.to_string())
    }
}

/// Trait for generative-AI text/audio classification backends
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Sends the request and returns the model's free-text answer
    async fn generate(&self, request: GenerationRequest) -> Result<String, AiError>;
}
