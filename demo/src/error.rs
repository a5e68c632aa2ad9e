//! Error handling for the demo server.
//!
//! Maps SDK failures onto HTTP responses with stable machine-readable
//! codes. Upstream response bodies are never forwarded to callers.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use allscreenshots_sdk::Error as SdkError;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The SDK call behind the handler failed.
    #[error(transparent)]
    Sdk(#[from] SdkError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self::Sdk(err) = self;

        let (status, code, message) = match &err {
            SdkError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                "invalid_request",
                message.clone(),
            ),
            SdkError::Authentication { .. } => (
                StatusCode::BAD_GATEWAY,
                "upstream_auth",
                "the server's screenshot credentials were rejected".to_string(),
            ),
            SdkError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "the screenshot quota is exhausted, try again later".to_string(),
            ),
            SdkError::Api { .. } => (
                StatusCode::BAD_GATEWAY,
                "upstream_rejected",
                "the screenshot service rejected the request".to_string(),
            ),
            SdkError::Service { .. } | SdkError::Transport(_) => (
                StatusCode::BAD_GATEWAY,
                "upstream_unavailable",
                "the screenshot service is unavailable".to_string(),
            ),
            SdkError::Serialization(_) | SdkError::Deserialization(_) => (
                StatusCode::BAD_GATEWAY,
                "upstream_protocol",
                "the screenshot service returned an unexpected response".to_string(),
            ),
            SdkError::InvalidConfig(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "misconfigured",
                "the server is misconfigured".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(%err, code, "request failed");
        } else {
            warn!(%err, code, "request rejected");
        }

        let retry_after = err.retry_after();
        let mut response = (
            status,
            Json(json!({
                "success": false,
                "error": code,
                "message": message,
            })),
        )
            .into_response();

        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }

        response
    }
}
