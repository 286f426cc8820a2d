#![forbid(unsafe_code)]
//! Web search integration for ResearchDesk
//!
//! Provides general-purpose web search via the Brave Search API with
//! DuckDuckGo's keyless HTML search as fallback. Each result carries a snippet
//! that the research pipeline stitches into its web-search section.
//!
//! # Architecture
//!
//! Both backends implement [`SearchProvider`]. [`WebSearchClient`] wraps them:
//! Brave is tried first when a key is configured, DuckDuckGo otherwise or when
//! Brave fails or finds nothing.

mod brave;
mod config;
mod duckduckgo;
mod error;
mod models;
mod provider;

pub use brave::BraveSearchClient;
pub use config::WebSearchConfig;
pub use duckduckgo::DuckDuckGoClient;
pub use error::WebSearchError;
pub use models::{SearchResult, WebSearchResponse};
pub use provider::SearchProvider;

use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Combined web search client with fallback support
#[derive(Debug)]
pub struct WebSearchClient {
    brave: Option<BraveSearchClient>,
    duckduckgo: DuckDuckGoClient,
    config: WebSearchConfig,
}

impl WebSearchClient {
    /// Create a new web search client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP clients
    /// cannot be initialized.
    pub fn new(config: WebSearchConfig) -> Result<Self, WebSearchError> {
        config.validate().map_err(WebSearchError::ConfigurationError)?;

        let brave = if config.brave_api_key.is_some() {
            Some(BraveSearchClient::new(&config)?)
        } else {
            info!("No Brave API key configured, using DuckDuckGo only");
            None
        };

        let duckduckgo = DuckDuckGoClient::new(&config)?;

        Ok(Self {
            brave,
            duckduckgo,
            config,
        })
    }

    /// Check if Brave Search is configured
    #[must_use]
    pub const fn has_brave(&self) -> bool {
        self.brave.is_some()
    }

    fn may_use_duckduckgo(&self) -> bool {
        self.config.fallback_enabled || self.brave.is_none()
    }
}

#[async_trait]
impl SearchProvider for WebSearchClient {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<WebSearchResponse, WebSearchError> {
        let max_results = max_results.min(self.config.max_results);

        let brave_error = if let Some(ref brave) = self.brave {
            match brave.search(query, max_results).await {
                Ok(response) if response.has_results() => {
                    debug!(results = response.results.len(), "Brave Search returned results");
                    return Ok(response);
                },
                Ok(_) => None,
                Err(e) if e.should_fallback() => {
                    warn!(error = %e, "Brave Search failed");
                    Some(e)
                },
                Err(e) => return Err(e),
            }
        } else {
            None
        };

        if self.may_use_duckduckgo() {
            debug!("Using DuckDuckGo search");
            return self.duckduckgo.search(query, max_results).await;
        }

        Err(brave_error.unwrap_or_else(|| WebSearchError::NoResults {
            query: query.to_string(),
        }))
    }

    fn provider_name(&self) -> &'static str {
        if self.brave.is_some() {
            "brave+duckduckgo"
        } else {
            "duckduckgo"
        }
    }
}
