//! User-facing error type for backend calls.

use thiserror::Error;

/// Errors that can occur when calling the savings backend.
///
/// The `Display` output is the message shown to the user, so repositories
/// never leak raw transport errors past this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("error {status}: {reason}")]
    Status { status: u16, reason: String },

    /// Host unreachable, connection dropped, or request timed out
    #[error("connection error, check network")]
    Connection,

    /// Backend answered but the body was not what we expected
    #[error("server error: {0}")]
    Server(String),

    /// 2xx with no body where one is required
    #[error("empty response from server")]
    EmptyBody,

    /// Anything else
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Build a status error using the canonical reason phrase.
    #[must_use]
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Connection
        } else if err.is_decode() {
            Self::Server(err.to_string())
        } else if let Some(status) = err.status() {
            Self::status(status)
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Server(err.to_string())
    }
}
