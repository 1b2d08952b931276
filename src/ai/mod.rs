// Public API
pub use client::{AiClient, AiError, GenerationRequest, InlineData, ThinkingLevel};
pub use gemini::GeminiClient;

// Internal modules
mod client;
mod gemini;
pub mod prompts;
