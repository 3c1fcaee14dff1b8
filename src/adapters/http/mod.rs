//! HTTP inbound adapter. axum router for the chat page and the chat endpoint.
//!
//! Handlers only translate HTTP to `ChatPort` calls; no business logic here.

pub mod error;
pub mod handlers;

use crate::ports::ChatPort;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ChatError;

/// Shared state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatPort>,
}

impl AppState {
    pub fn new(chat: Arc<dyn ChatPort>) -> Self {
        Self { chat }
    }
}

/// Builds the router: `GET /` (chat page) and `POST /chat`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
