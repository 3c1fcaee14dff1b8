//! Gemini adapter for text generation.
//!
//! Calls the Generative Language REST API (`models/{model}:generateContent`)
//! and implements `GenerationPort`. One attempt per call, no retry.

use crate::domain::{DomainError, Prompt};
use crate::ports::GenerationPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Public Generative Language API endpoint.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Gemini `generateContent` adapter.
///
/// The API key travels in the `x-goog-api-key` header so it never appears in
/// request URLs or logs.
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Option<Duration>,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_url` - API base (e.g. "https://generativelanguage.googleapis.com")
    /// * `api_key` - Google AI Studio / Cloud API key
    /// * `model` - Model name (e.g. "gemini-2.5-flash")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            timeout: None,
        }
    }

    /// Bound each upstream call. Without this a stalled upstream stalls the request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Joins the text parts of the first candidate, the way the SDK's `.text` does.
    fn extract_text(response: GenerateContentResponse) -> Result<String, DomainError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("prompt blocked ({})", r))
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(DomainError::MalformedResponse(reason));
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if texts.is_empty() {
            return Err(DomainError::MalformedResponse(format!(
                "candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(texts.concat())
    }
}

/// `generateContent` request body.
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// `generateContent` response body (only the fields we read).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[async_trait::async_trait]
impl GenerationPort for GeminiAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String, DomainError> {
        debug!(
            model = %self.model,
            prompt_len = prompt.as_str().len(),
            "sending prompt to Gemini"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.as_str().to_string()),
                }],
            }],
        };

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::Generation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Gemini API returned error");
            return Err(DomainError::Generation(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            DomainError::MalformedResponse(format!("Failed to parse API response: {}", e))
        })?;

        let text = Self::extract_text(body)?;
        info!(model = %self.model, text_len = text.len(), "generation complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessContext;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(v: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(v).unwrap()
    }

    fn adapter(server: &MockServer) -> GeminiAdapter {
        GeminiAdapter::new(server.uri(), "test-key".into(), "gemini-test".into())
    }

    fn prompt() -> Prompt {
        Prompt::assemble(&BusinessContext::new("ctx"), "hello")
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let a = GeminiAdapter::new(
            "https://example.test/".into(),
            "k".into(),
            DEFAULT_GEMINI_MODEL.into(),
        );
        assert_eq!(
            a.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_extract_joins_parts() {
        let body = parse(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hi " }, { "text": "there" }] },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(GeminiAdapter::extract_text(body).unwrap(), "Hi there");
    }

    #[test]
    fn test_extract_blocked_prompt() {
        let body = parse(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        let err = GeminiAdapter::extract_text(body).unwrap_err();
        assert!(err.to_string().contains("prompt blocked (SAFETY)"));
    }

    #[test]
    fn test_extract_candidate_without_content() {
        let body = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        let err = GeminiAdapter::extract_text(body).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "ctx\n\nCustomer: hello\nBrewBot:" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Welcome!" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = adapter(&server).generate(&prompt()).await.unwrap();
        assert_eq!(text, "Welcome!");
    }

    #[tokio::test]
    async fn test_generate_maps_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .mount(&server)
            .await;

        let err = adapter(&server).generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, DomainError::Generation(_)));
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("quota exhausted"));
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = adapter(&server).generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_times_out_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "candidates": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let err = adapter(&server)
            .with_timeout(Duration::from_millis(100))
            .generate(&prompt())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Generation(_)));
    }
}
