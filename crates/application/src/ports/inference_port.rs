//! Inference port - Interface for hosted text generation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if available)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

impl InferenceResult {
    /// Result carrying only text, for adapters without usage data
    #[must_use]
    pub fn text(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            tokens_used: None,
            latency_ms: 0,
        }
    }
}

/// Port for inference operations
///
/// Each call is a single prompt and a single completion. Sampling settings
/// belong to the adapter's configuration.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a completion for one prompt
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Get the name of the current model
    fn current_model(&self) -> String;
}
