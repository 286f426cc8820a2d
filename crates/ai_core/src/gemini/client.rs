//! Gemini client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::wire::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Hosted inference engine using the Gemini API
pub struct GeminiInferenceEngine {
    client: Client,
    config: InferenceConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for GeminiInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInferenceEngine")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.default_model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GeminiInferenceEngine {
    /// Create a new Gemini inference engine
    pub fn new(config: InferenceConfig, api_key: SecretString) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("ResearchDesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Gemini inference engine"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// `generateContent` URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout(self.config.timeout_ms)
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }
}

/// Map a non-success status to a typed error
fn status_error(status: StatusCode, model: &str, body: String) -> InferenceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            InferenceError::AuthenticationFailed(format!("Status {status}"))
        },
        StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(model.to_string()),
        StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
        s if s.is_server_error() => InferenceError::ServerError(format!("Status {s}: {body}")),
        s => InferenceError::RequestFailed(format!("Status {s}: {body}")),
    }
}

#[async_trait]
impl InferenceEngine for GeminiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn generate(&self, request: InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let model = self.config.default_model.clone();

        let body = GenerateContentRequest::from_messages(
            &request.messages,
            GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        );

        debug!(turns = body.contents.len(), "Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url(&model))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Inference request failed");
            return Err(status_error(status, &model, body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .first_candidate_text()
            .ok_or_else(|| InferenceError::InvalidResponse("response contained no text".into()))?;
        let finish_reason = parsed.finish_reason();
        let usage = parsed.usage_metadata.map(Into::into);

        debug!(tokens = ?usage, chars = content.len(), "Inference completed");

        Ok(InferenceResponse {
            content,
            model: parsed.model_version.unwrap_or(model),
            usage,
            finish_reason,
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
