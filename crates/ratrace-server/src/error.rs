//! Error types for the HTTP API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Game-rule failures map to 400 with the rule's player-facing message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Errors that can occur in the HTTP API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An invalid request parameter or body was provided.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A game action was rejected; the message is the rule's own.
    #[error("{0}")]
    ActionFailed(String),

    /// NPC chat was requested but no LLM backend is configured.
    #[error("NPC chat is not configured on this server")]
    ChatUnavailable,

    /// The NPC chat pipeline failed.
    #[error("chat failed: {0}")]
    Chat(#[from] ratrace_npc::NpcError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidRequest(msg) | Self::ActionFailed(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::ChatUnavailable => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            Self::Chat(e) => (StatusCode::BAD_GATEWAY, format!("chat failed: {e}")),
            Self::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("storage error: {e}")),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
