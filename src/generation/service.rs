use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ai::{prompts, AiClient, GenerationRequest};

const QUESTION_TEMPERATURE: f32 = 0.5;
const AUDIO_TEMPERATURE: f32 = 0.3;
const TRANSCRIPT_TEMPERATURE: f32 = 0.2;

pub const DEFAULT_AUDIO_MIME_TYPE: &str = "audio/webm";
const BULLET: char = '•';
const NO_CLIENT_AUDIO_SUMMARY: &str = "Voice contribution";
const EMPTY_AUDIO_SUMMARY: &str = "• Voice contribution recorded";
const FAILED_AUDIO_SUMMARY: &str = "• Voice contribution";

/// Summary of an audio contribution. The transcript is never populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSummary {
    pub transcript: String,
    pub summary: String,
}

impl AudioSummary {
    fn summary_only(summary: impl Into<String>) -> Self {
        Self {
            transcript: String::new(),
            summary: summary.into(),
        }
    }
}

/// Opening questions and bullet summaries produced by the generative model,
/// with deterministic fallbacks when it is missing or failing
#[derive(Clone)]
pub struct GenerationService {
    ai_client: Option<Arc<dyn AiClient>>,
}

impl GenerationService {
    pub fn new(ai_client: Option<Arc<dyn AiClient>>) -> Self {
        Self { ai_client }
    }

    #[instrument(skip(self))]
    pub async fn generate_opening_question(&self, topic: &str) -> String {
        let Some(client) = &self.ai_client else {
            return fallback_question(topic);
        };

        let request =
            GenerationRequest::text(prompts::opening_question(topic), QUESTION_TEMPERATURE);
        match client.generate(request).await {
            Ok(response) => {
                let question = clean_question(&response);
                debug!(question = %question, "Generated opening question");
                question
            }
            Err(e) => {
                warn!(error = %e, "Opening question generation failed");
                fallback_question(topic)
            }
        }
    }

    #[instrument(skip(self, audio), fields(audio_bytes = audio.len()))]
    pub async fn summarize_audio(&self, audio: Vec<u8>, mime_type: &str) -> AudioSummary {
        let Some(client) = &self.ai_client else {
            return AudioSummary::summary_only(NO_CLIENT_AUDIO_SUMMARY);
        };

        let request = GenerationRequest::text(prompts::audio_summary(), AUDIO_TEMPERATURE)
            .with_inline_data(mime_type, audio);
        match client.generate(request).await {
            Ok(response) => AudioSummary::summary_only(keep_bullets(&response)),
            Err(e) => {
                warn!(error = %e, "Audio processing error");
                AudioSummary::summary_only(FAILED_AUDIO_SUMMARY)
            }
        }
    }

    #[instrument(skip(self, transcript), fields(transcript_length = transcript.len()))]
    pub async fn summarize_transcript(&self, transcript: &str) -> String {
        let Some(client) = &self.ai_client else {
            return truncate_with_ellipsis(transcript, 100);
        };

        let request = GenerationRequest::text(
            prompts::transcript_summary(transcript),
            TRANSCRIPT_TEMPERATURE,
        );
        match client.generate(request).await {
            Ok(response) => response.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "Transcript summarization failed");
                format!("{} {}...", BULLET, take_chars(transcript, 50))
            }
        }
    }
}

fn fallback_question(topic: &str) -> String {
    format!("What are your thoughts on {}?", topic)
}

/// Strips wrapping quotes and guarantees a trailing question mark
fn clean_question(response: &str) -> String {
    let mut question = response
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    if !question.ends_with('?') {
        question.push('?');
    }
    question
}

/// Keeps only bullet lines unless the answer already starts with a bullet
fn keep_bullets(response: &str) -> String {
    let trimmed = response.trim();
    let summary = if trimmed.starts_with(BULLET) {
        trimmed.to_string()
    } else {
        trimmed
            .lines()
            .filter(|line| line.trim().starts_with(BULLET))
            .collect::<Vec<_>>()
            .join("\n")
    };

    if summary.is_empty() {
        EMPTY_AUDIO_SUMMARY.to_string()
    } else {
        summary
    }
}

fn take_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    let head = take_chars(text, limit);
    if head.len() < text.len() {
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
