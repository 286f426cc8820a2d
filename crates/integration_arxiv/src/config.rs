//! arXiv client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the arXiv API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArxivConfig {
    /// API base URL; requests go to `{base_url}/api/query`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Entries to fetch per query (default: 2)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum characters of research text taken from the entries
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Queries longer than this are cut before sending
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://export.arxiv.org".to_string()
}

const fn default_max_results() -> usize {
    2
}

const fn default_max_chars() -> usize {
    2000
}

const fn default_max_query_chars() -> usize {
    300
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_results: default_max_results(),
            max_chars: default_max_chars(),
            max_query_chars: default_max_query_chars(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ArxivConfig {
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
        if self.max_results == 0 || self.max_results > 50 {
            return Err("max_results must be between 1 and 50".to_string());
        }
        if self.max_chars == 0 {
            return Err("max_chars must be greater than 0".to_string());
        }
        if self.max_query_chars == 0 {
            return Err("max_query_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}
