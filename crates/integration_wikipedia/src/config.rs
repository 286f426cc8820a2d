//! Wikipedia client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the MediaWiki client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// Action API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of articles to fetch per query (default: 1)
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Maximum characters of research text taken from the articles
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Return only the lead section of each article
    #[serde(default = "default_intro_only")]
    pub intro_only: bool,
}

fn default_base_url() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

const fn default_top_k() -> usize {
    1
}

const fn default_max_chars() -> usize {
    1500
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_intro_only() -> bool {
    true
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            top_k: default_top_k(),
            max_chars: default_max_chars(),
            timeout_secs: default_timeout_secs(),
            intro_only: default_intro_only(),
        }
    }
}

impl WikipediaConfig {
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.top_k == 0 || self.top_k > 10 {
            return Err("top_k must be between 1 and 10".to_string());
        }
        if self.max_chars == 0 {
            return Err("max_chars must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
