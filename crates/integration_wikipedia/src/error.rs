//! Wikipedia error types

use thiserror::Error;

/// Errors from the MediaWiki client
#[derive(Debug, Error)]
pub enum WikipediaError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    /// MediaWiki answered with an `error` object
    #[error("API error {code}: {info}")]
    ApiError { code: String, info: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

impl WikipediaError {
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
