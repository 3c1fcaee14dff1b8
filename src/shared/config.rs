//! Application configuration. Bind address, context path, Gemini credentials.

use crate::adapters::ai::{DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL};
use crate::adapters::persistence::context_file::DEFAULT_CONTEXT_FILE;
use serde::Deserialize;
use std::time::Duration;

/// Listen on all interfaces, port 80, unless configured otherwise.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:80";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Socket address for the HTTP server. Read from BREWBOT_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Path of the business context text file. Read from BREWBOT_CONTEXT_PATH.
    #[serde(default)]
    pub context_path: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Gemini Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Gemini API key. Read from BREWBOT_GEMINI_API_KEY (or GEMINI_API_KEY).
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini model name. Defaults to "gemini-2.5-flash". Read from BREWBOT_GEMINI_MODEL.
    #[serde(default)]
    pub gemini_model: Option<String>,

    /// Generative Language API base URL. Read from BREWBOT_GEMINI_API_URL.
    #[serde(default)]
    pub gemini_api_url: Option<String>,

    /// Per-call upstream timeout in seconds. Unset means no timeout. Read from BREWBOT_GEMINI_TIMEOUT_SECS.
    #[serde(default)]
    pub gemini_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BREWBOT"));
        if let Ok(path) = std::env::var("BREWBOT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the bind address. Defaults to 0.0.0.0:80.
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Returns the business context path. Defaults to ./business_context.txt.
    pub fn context_path_or_default(&self) -> String {
        self.context_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTEXT_FILE.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gemini Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the Gemini API key if configured. Reads from config or GEMINI_API_KEY env.
    /// Empty values count as unset.
    pub fn gemini_api_key(&self) -> Option<String> {
        self.gemini_api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the Gemini model name. Defaults to "gemini-2.5-flash".
    pub fn gemini_model_or_default(&self) -> String {
        self.gemini_model
            .clone()
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string())
    }

    /// Returns the Generative Language API base URL.
    pub fn gemini_api_url_or_default(&self) -> String {
        self.gemini_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
    }

    /// Returns the upstream timeout, if one is configured.
    pub fn gemini_timeout(&self) -> Option<Duration> {
        self.gemini_timeout_secs.map(Duration::from_secs)
    }

    /// Returns true if Gemini is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.gemini_api_key().is_some()
    }
}
