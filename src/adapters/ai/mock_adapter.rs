//! Mock generation adapter for running without API calls.
//!
//! Returns a fixed reply (or a fixed failure) for development and tests.

use crate::domain::{DomainError, Prompt};
use crate::ports::GenerationPort;
use std::time::Duration;
use tracing::info;

const DEFAULT_MOCK_REPLY: &str =
    "[MOCK] Thanks for your message! Set BREWBOT_GEMINI_API_KEY to get real answers.";

/// Mock generation adapter.
///
/// Answers every prompt with the same text without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    outcome: Result<String, String>,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms) and the default reply.
    pub fn new() -> Self {
        Self {
            delay_ms: 100,
            outcome: Ok(DEFAULT_MOCK_REPLY.to_string()),
        }
    }

    /// Mock that answers with `reply` immediately.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            outcome: Ok(reply.into()),
        }
    }

    /// Mock whose every call fails with `DomainError::Generation(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            outcome: Err(message.into()),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GenerationPort for MockAiAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String, DomainError> {
        info!(
            prompt_len = prompt.as_str().len(),
            "[MOCK] Simulating generation"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        self.outcome.clone().map_err(DomainError::Generation)
    }
}
