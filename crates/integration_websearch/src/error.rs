//! Web search error types

use thiserror::Error;

/// Errors that can occur during web search operations
#[derive(Debug, Error)]
pub enum WebSearchError {
    /// Connection to the search service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to search service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from search service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search query is invalid or empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API key is missing or invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// No provider produced results and no fallback was allowed
    #[error("No results found for query: {query}")]
    NoResults { query: String },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

impl WebSearchError {
    /// Map a transport-level reqwest error
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }

    /// Returns true if the fallback provider should be tried
    #[must_use]
    pub const fn should_fallback(&self) -> bool {
        self.is_retryable()
            || matches!(
                self,
                Self::NoResults { .. } | Self::AuthenticationFailed(_) | Self::ParseError(_)
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(WebSearchError::ConnectionFailed("x".into()).is_retryable());
        assert!(WebSearchError::ServiceUnavailable("x".into()).is_retryable());
        assert!(WebSearchError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(!WebSearchError::InvalidQuery("x".into()).is_retryable());
        assert!(!WebSearchError::ParseError("x".into()).is_retryable());
    }

    #[test]
    fn bad_brave_key_still_falls_back() {
        assert!(WebSearchError::AuthenticationFailed("x".into()).should_fallback());
        assert!(!WebSearchError::InvalidQuery("x".into()).should_fallback());
    }

    #[test]
    fn error_display() {
        let err = WebSearchError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));
        let err = WebSearchError::Timeout { timeout_secs: 12 };
        assert_eq!(err.to_string(), "Request timed out after 12 seconds");
    }
}
