//! arXiv API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::{
    config::ArxivConfig,
    error::ArxivError,
    feed::{ArxivEntry, parse_feed},
};

/// Preprint repository search
#[async_trait]
pub trait PreprintClient: Send + Sync {
    /// Search all fields for `query`, returning at most `max_results` entries
    async fn search(&self, query: &str, max_results: usize)
    -> Result<Vec<ArxivEntry>, ArxivError>;
}

/// HTTP client for `GET /api/query`
#[derive(Debug)]
pub struct ArxivClient {
    client: Client,
    config: ArxivConfig,
}

impl ArxivClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ArxivConfig) -> Result<Self, ArxivError> {
        config.validate().map_err(ArxivError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ResearchDesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ArxivError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn query_url(&self) -> String {
        format!("{}/api/query", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the `search_query` value, cutting overlong input on a char boundary
    fn search_query(&self, query: &str) -> String {
        let query: String = query.chars().take(self.config.max_query_chars).collect();
        format!("all:{}", query.trim())
    }
}

#[async_trait]
impl PreprintClient for ArxivClient {
    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ArxivEntry>, ArxivError> {
        if query.trim().is_empty() || max_results == 0 {
            return Ok(Vec::new());
        }

        let search_query = self.search_query(query);
        let max_results = max_results.min(self.config.max_results).to_string();

        debug!(max_results = %max_results, "Sending arXiv query");

        let response = self
            .client
            .get(self.query_url())
            .query(&[
                ("search_query", search_query.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ArxivError::from_transport(&e, self.config.timeout_secs))?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(ArxivError::RateLimitExceeded),
            s if s.is_server_error() => {
                return Err(ArxivError::ServiceUnavailable(format!("HTTP {s}")));
            },
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ArxivError::RequestFailed(format!("HTTP {s}: {body}")));
            },
            _ => {},
        }

        let body = response
            .text()
            .await
            .map_err(|e| ArxivError::ParseError(e.to_string()))?;

        let entries = parse_feed(&body)?;
        debug!(entries = entries.len(), "arXiv query completed");
        Ok(entries)
    }
}
