//! Inbound port. The HTTP adapter calls into the application.

use crate::domain::DomainError;

/// Answers one customer message.
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Returns the reply text, already post-processed.
    async fn reply(&self, message: &str) -> Result<String, DomainError>;
}
