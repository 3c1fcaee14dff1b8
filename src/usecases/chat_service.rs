//! Chat service. Turns one customer message into one BrewBot reply.
//!
//! Prompt assembly, a single generation call, then the quick-replies rule.

use crate::domain::{BusinessContext, DomainError, Prompt, apply_quick_replies};
use crate::ports::{ChatPort, GenerationPort};
use std::sync::Arc;
use tracing::{debug, info};

/// Service answering chat messages.
///
/// Holds the process-wide business context (immutable) and the generation
/// port. Cheap to share behind an `Arc`; no interior state.
pub struct ChatService {
    context: Arc<BusinessContext>,
    generator: Arc<dyn GenerationPort>,
}

impl ChatService {
    /// Create a new chat service.
    ///
    /// # Arguments
    /// * `context` - Business context loaded at startup
    /// * `generator` - Generation port implementation (Gemini, Mock, etc.)
    pub fn new(context: Arc<BusinessContext>, generator: Arc<dyn GenerationPort>) -> Self {
        Self { context, generator }
    }

    pub fn context(&self) -> &BusinessContext {
        &self.context
    }
}

#[async_trait::async_trait]
impl ChatPort for ChatService {
    async fn reply(&self, message: &str) -> Result<String, DomainError> {
        let prompt = Prompt::assemble(&self.context, message);
        debug!(prompt_len = prompt.as_str().len(), "prompt assembled");

        let generated = self.generator.generate(&prompt).await?;
        let reply = apply_quick_replies(message, generated);

        info!(
            message_len = message.len(),
            reply_len = reply.len(),
            "chat reply ready"
        );
        Ok(reply)
    }
}
