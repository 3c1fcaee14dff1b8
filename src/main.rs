//! Wiring & DI. Entry point: bootstrap adapters, inject into the chat service, serve HTTP.
//! No business logic here.

use brewbot::adapters::ai::{GeminiAdapter, MockAiAdapter};
use brewbot::adapters::http::{self, AppState};
use brewbot::adapters::persistence::load_business_context;
use brewbot::domain::DomainError;
use brewbot::ports::{ChatPort, GenerationPort};
use brewbot::shared::config::AppConfig;
use brewbot::usecases::ChatService;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| DomainError::Config(e.to_string()))?;

    // --- Business context: read once, shared read-only by every request ---
    let context = Arc::new(load_business_context(cfg.context_path_or_default()).await?);

    // --- Generation adapter ---
    let generator: Arc<dyn GenerationPort> = match cfg.gemini_api_key() {
        Some(api_key) => {
            info!(
                model = %cfg.gemini_model_or_default(),
                url = %cfg.gemini_api_url_or_default(),
                timeout_secs = ?cfg.gemini_timeout_secs,
                "Gemini generation enabled"
            );
            let mut adapter = GeminiAdapter::new(
                cfg.gemini_api_url_or_default(),
                api_key,
                cfg.gemini_model_or_default(),
            );
            if let Some(timeout) = cfg.gemini_timeout() {
                adapter = adapter.with_timeout(timeout);
            }
            Arc::new(adapter)
        }
        None => {
            warn!("BREWBOT_GEMINI_API_KEY not set, using mock generation adapter");
            Arc::new(MockAiAdapter::new())
        }
    };

    let chat: Arc<dyn ChatPort> = Arc::new(ChatService::new(context, generator));
    let app = http::router(AppState::new(chat));

    let bind_addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "brewbot listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
