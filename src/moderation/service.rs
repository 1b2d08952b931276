use std::sync::Arc;
use strum_macros::{Display, EnumString};
use tracing::{debug, info, instrument, warn};

use super::blocklist::{find_prohibited_term, PROHIBITED_TERMS_REASON};
use crate::ai::{prompts, AiClient, GenerationRequest};

const MODERATION_TEMPERATURE: f32 = 0.1;
const DEFAULT_AI_REASON: &str = "Flagged by AI moderation.";
const UNAVAILABLE_REASON: &str = "Moderation service unavailable.";

/// What to do with content when the AI classifier call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FailurePolicy {
    /// Treat content as safe
    Open,
    /// Reject content
    Closed,
}

/// Outcome of a moderation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationVerdict {
    pub is_safe: bool,
    pub reason: Option<String>,
}

impl ModerationVerdict {
    pub fn safe() -> Self {
        Self {
            is_safe: true,
            reason: None,
        }
    }

    pub fn unsafe_because(reason: impl Into<String>) -> Self {
        Self {
            is_safe: false,
            reason: Some(reason.into()),
        }
    }

    /// Reason text, empty when the content is safe
    pub fn reason_or_empty(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }
}

/// Two-stage content moderation: keyword blocklist, then AI classification
#[derive(Clone)]
pub struct ModerationService {
    ai_client: Option<Arc<dyn AiClient>>,
    failure_policy: FailurePolicy,
}

impl ModerationService {
    pub fn new(ai_client: Option<Arc<dyn AiClient>>, failure_policy: FailurePolicy) -> Self {
        if ai_client.is_none() {
            warn!("No AI client configured. Using keyword-only moderation.");
        }
        Self {
            ai_client,
            failure_policy,
        }
    }

    #[instrument(skip(self, text), fields(text_length = text.len()))]
    pub async fn moderate_content(&self, text: &str) -> ModerationVerdict {
        if let Some(term) = find_prohibited_term(text) {
            info!(term = %term, "Content rejected by blocklist");
            return ModerationVerdict::unsafe_because(PROHIBITED_TERMS_REASON);
        }

        let Some(client) = &self.ai_client else {
            debug!("Blocklist passed, no AI client configured");
            return ModerationVerdict::safe();
        };

        let request = GenerationRequest::text(prompts::moderation(text), MODERATION_TEMPERATURE);
        match client.generate(request).await {
            Ok(response) => {
                let verdict = parse_verdict(&response);
                debug!(is_safe = verdict.is_safe, "AI moderation completed");
                verdict
            }
            Err(e) => {
                warn!(error = %e, policy = %self.failure_policy, "AI moderation error");
                match self.failure_policy {
                    FailurePolicy::Open => ModerationVerdict::safe(),
                    FailurePolicy::Closed => ModerationVerdict::unsafe_because(UNAVAILABLE_REASON),
                }
            }
        }
    }
}

/// Parses a `SAFE` / `UNSAFE\n<reason>` answer
fn parse_verdict(response: &str) -> ModerationVerdict {
    let result = response.trim();
    if !result.to_uppercase().starts_with("UNSAFE") {
        return ModerationVerdict::safe();
    }

    let reason = result
        .split('\n')
        .nth(1)
        .map(str::trim)
        .unwrap_or(DEFAULT_AI_REASON);
    ModerationVerdict::unsafe_because(reason)
}
