//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The chat request body was not usable (not JSON, `message` missing or not a string).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure or non-success status from the generation service.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// The generation service answered, but the body carried no usable text.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Business context error: {0}")]
    Context(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::InvalidRequest(_))
    }
}
