//! Gemini inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{
    GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter for the hosted Gemini model
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiInferenceEngine,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration and API key
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let engine = GeminiInferenceEngine::new(config, api_key)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            InferenceError::AuthenticationFailed(msg) => ApplicationError::NotAuthorized(msg),
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Model connection failed: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            InferenceError::ServerError(msg) => {
                ApplicationError::ExternalService(format!("Model service error: {msg}"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::simple(prompt))
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            finish_reason = ?response.finish_reason,
            latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}
