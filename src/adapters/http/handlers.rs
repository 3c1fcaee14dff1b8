//! Request handlers.

use super::AppState;
use super::error::ChatError;
use crate::domain::{ChatReply, ChatRequest, DomainError};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use tracing::{error, warn};

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

/// `GET /` — static chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /chat` — answer one customer message.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    let Json(request) = body.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected chat request body");
        DomainError::InvalidRequest(rejection.body_text())
    })?;

    match state.chat.reply(&request.message).await {
        Ok(text) => Ok(Json(ChatReply::Response(text))),
        Err(e) => {
            error!(error = %e, "chat request failed");
            Err(e.into())
        }
    }
}
