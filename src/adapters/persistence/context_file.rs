//! Loads the business context from a UTF-8 text file at startup.
//!
//! Missing file falls back to `BusinessContext::FALLBACK`; every other I/O
//! failure is returned so startup aborts.

use crate::domain::{BusinessContext, DomainError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Default file name, resolved against the working directory.
pub const DEFAULT_CONTEXT_FILE: &str = "business_context.txt";

pub async fn load_business_context(path: impl AsRef<Path>) -> Result<BusinessContext, DomainError> {
    let path = path.as_ref();
    match fs::read_to_string(path).await {
        Ok(text) => {
            info!(path = %path.display(), len = text.len(), "business context loaded");
            Ok(BusinessContext::new(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "business context file not found, using default fallback context"
            );
            Ok(BusinessContext::fallback())
        }
        Err(e) => Err(DomainError::Context(format!(
            "read {}: {}",
            path.display(),
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONTEXT_FILE);
        std::fs::write(&path, "You are BrewBot, barista at Bean There.\nBe brief.\n").unwrap();

        let ctx = load_business_context(&path).await.unwrap();
        assert_eq!(
            ctx.as_str(),
            "You are BrewBot, barista at Bean There.\nBe brief.\n"
        );
    }

    #[tokio::test]
    async fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = load_business_context(dir.path().join("nope.txt"))
            .await
            .unwrap();
        assert_eq!(ctx.as_str(), "You are a helpful assistant.");
    }

    #[tokio::test]
    async fn test_empty_file_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let ctx = load_business_context(&path).await.unwrap();
        assert_eq!(ctx.as_str(), "");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load_business_context(&path).await.unwrap_err();
        assert!(matches!(err, DomainError::Context(_)));
    }

    #[tokio::test]
    async fn test_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_business_context(dir.path()).await.unwrap_err();
        assert!(matches!(err, DomainError::Context(_)));
    }
}
