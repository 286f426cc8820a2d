//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// A source answered but had nothing for the query
    #[error("No content: {0}")]
    NoContent(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Credentials were rejected by an external service
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_transparently() {
        let err: ApplicationError = DomainError::EmptyQuery.into();
        assert_eq!(err.to_string(), DomainError::EmptyQuery.to_string());
    }

    #[test]
    fn no_content_names_the_reason() {
        let err = ApplicationError::NoContent("no extract".into());
        assert_eq!(err.to_string(), "No content: no extract");
    }
}
