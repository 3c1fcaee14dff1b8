//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Prompt};

/// Text generation service (Gemini, mock). One prompt in, generated text out.
///
/// No retry or timeout policy belongs here; adapters make a single attempt.
#[async_trait::async_trait]
pub trait GenerationPort: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, DomainError>;
}
