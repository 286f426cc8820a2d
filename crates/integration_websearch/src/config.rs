//! Web search configuration

use serde::{Deserialize, Serialize};

/// Configuration for web search services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchConfig {
    /// Brave Search API key (optional, enables Brave as primary provider)
    #[serde(default, skip_serializing)]
    pub brave_api_key: Option<String>,

    /// Brave Search API base URL
    #[serde(default = "default_brave_base_url")]
    pub brave_base_url: String,

    /// DuckDuckGo HTML search base URL
    #[serde(default = "default_duckduckgo_base_url")]
    pub duckduckgo_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Enable DuckDuckGo fallback when Brave fails or finds nothing
    #[serde(default = "default_fallback_enabled")]
    pub fallback_enabled: bool,

    /// Safe search level: "off", "moderate", "strict"
    #[serde(default = "default_safe_search")]
    pub safe_search: String,

    /// Preferred result country (ISO 3166-1 alpha-2 code, e.g., "US", "IN")
    #[serde(default = "default_result_country")]
    pub result_country: String,
}

fn default_brave_base_url() -> String {
    "https://api.search.brave.com/res/v1".to_string()
}

fn default_duckduckgo_base_url() -> String {
    "https://html.duckduckgo.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_results() -> usize {
    5
}

const fn default_fallback_enabled() -> bool {
    true
}

fn default_safe_search() -> String {
    "moderate".to_string()
}

fn default_result_country() -> String {
    "US".to_string()
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            brave_api_key: None,
            brave_base_url: default_brave_base_url(),
            duckduckgo_base_url: default_duckduckgo_base_url(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            fallback_enabled: default_fallback_enabled(),
            safe_search: default_safe_search(),
            result_country: default_result_country(),
        }
    }
}

impl WebSearchConfig {
    /// Create a configuration for testing (no API key, short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            brave_api_key: None,
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 || self.max_results > 20 {
            return Err("max_results must be between 1 and 20".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        let valid_safe_search = ["off", "moderate", "strict"];
        if !valid_safe_search.contains(&self.safe_search.as_str()) {
            return Err(format!(
                "safe_search must be one of: {}",
                valid_safe_search.join(", ")
            ));
        }

        Ok(())
    }
}
