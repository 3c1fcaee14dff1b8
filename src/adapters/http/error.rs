//! Maps chat errors into `{"error": ...}` responses.

use crate::domain::{ChatReply, DomainError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error leaving the chat handler.
///
/// Bad request bodies answer 400. Upstream failures keep status 200 so the
/// JSON key is the only difference a caller sees.
#[derive(Debug)]
pub struct ChatError(pub DomainError);

impl From<DomainError> for ChatError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        };
        (status, Json(ChatReply::Error(self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad = ChatError(DomainError::InvalidRequest("missing field".into())).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let upstream = ChatError(DomainError::Generation("timeout".into())).into_response();
        assert_eq!(upstream.status(), StatusCode::OK);

        let malformed =
            ChatError(DomainError::MalformedResponse("no candidates".into())).into_response();
        assert_eq!(malformed.status(), StatusCode::OK);
    }
}
