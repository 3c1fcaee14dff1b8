//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — adapters map into and out of these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring whose presence means a reply already carries quick replies.
pub const QUICK_REPLIES_MARKER: &str = "[quick_replies:";

/// Suffix appended to greeting replies. Rendered as buttons by the chat page.
pub const QUICK_REPLIES_SUFFIX: &str = " [quick_replies:Show Menu|Special Offers|Location & Hours]";

const CUSTOMER_LABEL: &str = "Customer: ";
const ASSISTANT_LABEL: &str = "BrewBot:";
const GREETING: &str = "hello";

/// Instructional text prefixed to every prompt. Loaded once at startup, read-only after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessContext(String);

impl BusinessContext {
    /// Used when the context file does not exist.
    pub const FALLBACK: &'static str = "You are a helpful assistant.";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn fallback() -> Self {
        Self::new(Self::FALLBACK)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Full text sent to the generation service for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// `<context>\n\nCustomer: <message>\nBrewBot:`
    pub fn assemble(context: &BusinessContext, message: &str) -> Self {
        Self(format!(
            "{}\n\n{}{}\n{}",
            context.as_str(),
            CUSTOMER_LABEL,
            message,
            ASSISTANT_LABEL
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by `POST /chat`. Exactly one of `response` / `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatReply {
    Response(String),
    Error(String),
}

/// Appends the quick-replies suffix when the customer greets with "hello".
///
/// Input match is case-insensitive but otherwise exact (no trimming); the
/// marker check on the reply is case-sensitive.
pub fn apply_quick_replies(message: &str, mut reply: String) -> String {
    if message.to_lowercase() == GREETING && !reply.contains(QUICK_REPLIES_MARKER) {
        reply.push_str(QUICK_REPLIES_SUFFIX);
    }
    reply
}
