//! Model and web search configuration.
//!
//! These sections carry secrets, so they wrap the client configs of
//! `ai_core` and `integration_websearch` and hand out plain copies only
//! when a client is built.

use ai_core::InferenceConfig;
use integration_websearch::WebSearchConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::default_true;

// ==============================
// Inference Configuration
// ==============================

/// Hosted text-generation model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceAppConfig {
    /// Base URL of the Generative Language API
    pub base_url: String,

    /// Model used for both the structuring and the drafting call
    pub model: String,

    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Maximum tokens to generate per call
    pub max_output_tokens: u32,

    /// API key; falls back to `GOOGLE_API_KEY` when unset
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,
}

impl Default for InferenceAppConfig {
    fn default() -> Self {
        let engine = InferenceConfig::default();
        Self {
            base_url: engine.base_url,
            model: engine.default_model,
            temperature: engine.temperature,
            timeout_ms: engine.timeout_ms,
            max_output_tokens: engine.max_output_tokens,
            api_key: None,
        }
    }
}

impl InferenceAppConfig {
    /// Convert to the `ai_core` engine config (the key travels separately)
    #[must_use]
    pub fn to_inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            base_url: self.base_url.clone(),
            default_model: self.model.clone(),
            timeout_ms: self.timeout_ms,
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }

    /// The configured key, if it is present and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_string());
        }
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        Ok(())
    }
}

// ==============================
// Web Search Configuration
// ==============================

/// Web search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchAppConfig {
    /// Brave Search API key (optional; DuckDuckGo only without it)
    ///
    /// Obtain from <https://brave.com/search/api/>
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Brave Search API base URL
    #[serde(default = "default_brave_base_url")]
    pub brave_base_url: String,

    /// DuckDuckGo HTML search base URL
    #[serde(default = "default_duckduckgo_base_url")]
    pub duckduckgo_base_url: String,

    /// Maximum number of search results per query (1-20)
    #[serde(default = "default_websearch_max_results")]
    pub max_results: u32,

    /// Request timeout in seconds
    #[serde(default = "default_websearch_timeout")]
    pub timeout_secs: u64,

    /// Enable DuckDuckGo fallback when Brave fails or returns no results
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,

    /// Safe search level: "off", "moderate", or "strict"
    #[serde(default = "default_safe_search")]
    pub safe_search: String,

    /// Country code for search results (e.g., "US", "IN")
    #[serde(default)]
    pub country: Option<String>,
}

fn default_brave_base_url() -> String {
    WebSearchConfig::default().brave_base_url
}

fn default_duckduckgo_base_url() -> String {
    WebSearchConfig::default().duckduckgo_base_url
}

const fn default_websearch_max_results() -> u32 {
    5
}

const fn default_websearch_timeout() -> u64 {
    30
}

fn default_safe_search() -> String {
    "moderate".to_string()
}

impl Default for WebSearchAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            brave_base_url: default_brave_base_url(),
            duckduckgo_base_url: default_duckduckgo_base_url(),
            max_results: default_websearch_max_results(),
            timeout_secs: default_websearch_timeout(),
            fallback_enabled: true,
            safe_search: default_safe_search(),
            country: None,
        }
    }
}

impl WebSearchAppConfig {
    /// Convert to `integration_websearch` config
    #[must_use]
    pub fn to_websearch_config(&self) -> WebSearchConfig {
        let mut config = WebSearchConfig::default();
        config.brave_api_key = self
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_string())
            .filter(|key| !key.trim().is_empty());
        config.brave_base_url.clone_from(&self.brave_base_url);
        config.duckduckgo_base_url.clone_from(&self.duckduckgo_base_url);
        config.max_results = self.max_results as usize;
        config.timeout_secs = self.timeout_secs;
        config.fallback_enabled = self.fallback_enabled;
        config.safe_search.clone_from(&self.safe_search);
        if let Some(ref country) = self.country {
            config.result_country.clone_from(country);
        }
        config
    }
}
