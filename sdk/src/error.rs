//! SDK error types.
//!
//! Provides the error taxonomy for client operations. Request failures map
//! onto distinct variants so callers can branch on what went wrong: bad
//! input (4xx), exhausted retries against a failing service, or local
//! encoding problems.

use std::collections::HashMap;

use serde::Deserialize;

/// Wire format of API error response bodies.
///
/// Parsed best-effort; servers are not required to return this shape.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    /// Human-readable message.
    pub(crate) message: Option<String>,

    /// Alternative message field some endpoints use instead of `message`.
    pub(crate) error: Option<String>,

    /// Machine-readable error code.
    pub(crate) code: Option<String>,

    /// Structured diagnostic details, e.g. per-field validation failures.
    pub(crate) details: Option<HashMap<String, serde_json::Value>>,
}

impl ErrorBody {
    /// Returns the best available message, preferring `message` over `error`.
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// Errors returned by the Allscreenshots client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to serialize a request body.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Failed to deserialize a response body.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Network-level failure outside the retryable classes.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API rejected the request parameters (HTTP 400).
    #[error("validation failed [{code}]: {message}")]
    Validation {
        /// Machine-readable error code.
        code: String,
        /// Human-readable message.
        message: String,
    },

    /// Authentication failed (HTTP 401 or 403).
    #[error("authentication failed [{code}]: {message}")]
    Authentication {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Machine-readable error code.
        code: String,
        /// Human-readable message.
        message: String,
    },

    /// Rate limit exceeded (HTTP 429) and retries exhausted.
    #[error("rate limited: {message}")]
    RateLimited {
        /// Human-readable message.
        message: String,
        /// Seconds to wait before retrying, from the Retry-After header.
        retry_after: Option<u64>,
    },

    /// The API rejected the request (other 4xx statuses, including 404).
    #[error("API error {status} [{code}]: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code.
        code: String,
        /// Human-readable message.
        message: String,
    },

    /// The service kept failing (5xx or network errors) until retries
    /// ran out.
    #[error("service unavailable after {attempts} attempts: {message}")]
    Service {
        /// Last HTTP status received, if any response arrived.
        status: Option<u16>,
        /// Machine-readable error code, if the API provided one.
        code: Option<String>,
        /// Human-readable message.
        message: String,
        /// Total requests issued before giving up.
        attempts: u32,
    },
}

impl Error {
    /// Returns the HTTP status code, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(400),
            Self::Authentication { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Service { status, .. } => *status,
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the machine-readable error code, when the API provided one.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Validation { code, .. }
            | Self::Authentication { code, .. }
            | Self::Api { code, .. } => Some(code),
            Self::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns the Retry-After value in seconds for rate limit errors.
    #[must_use]
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
