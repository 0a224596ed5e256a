//! Naver API client error types.

use std::sync::Arc;

/// Errors from the Naver Search API client.
#[derive(Debug, thiserror::Error)]
pub enum NaverError {
    /// Client id or secret not configured.
    #[error("missing credentials: {0} not set")]
    MissingCredentials(&'static str),

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Authentication failed (invalid client id or secret).
    #[error("authentication failed: invalid client credentials")]
    AuthError,

    /// Rate limited by the Naver API.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for NaverError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { NaverError::Timeout } else { NaverError::Network(Arc::new(err)) }
    }
}

impl From<NaverError> for blogmark_core::Error {
    fn from(err: NaverError) -> Self {
        blogmark_core::Error::ExternalService(err.to_string())
    }
}
