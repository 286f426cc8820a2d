//! Brave Search API client
//!
//! Client for the Brave Search API (<https://brave.com/search/api/>).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use crate::{
    WebSearchResponse, config::WebSearchConfig, error::WebSearchError, models::SearchResult,
    provider::{SearchProvider, normalize_query},
};

/// Brave returns at most this many results per request
const BRAVE_MAX_COUNT: usize = 20;

mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct BraveSearchResponse {
        pub web: Option<WebResults>,
    }

    #[derive(Debug, Deserialize)]
    pub struct WebResults {
        #[serde(default)]
        pub results: Vec<WebResult>,
    }

    #[derive(Debug, Deserialize)]
    pub struct WebResult {
        pub title: String,
        pub url: String,
        pub description: Option<String>,
    }
}

/// Brave Search API client
#[derive(Debug)]
pub struct BraveSearchClient {
    client: Client,
    api_key: String,
    base_url: String,
    safe_search: String,
    result_country: String,
    timeout_secs: u64,
}

impl BraveSearchClient {
    /// Create a new Brave Search client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or HTTP client cannot be created.
    pub fn new(config: &WebSearchConfig) -> Result<Self, WebSearchError> {
        let api_key = config.brave_api_key.clone().ok_or_else(|| {
            WebSearchError::ConfigurationError("Brave API key is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WebSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.brave_base_url.trim_end_matches('/').to_string(),
            safe_search: config.safe_search.clone(),
            result_country: config.result_country.to_lowercase(),
            timeout_secs: config.timeout_secs,
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn convert_results(response: api::BraveSearchResponse, max_results: usize) -> Vec<SearchResult> {
        response
            .web
            .map(|web| web.results)
            .unwrap_or_default()
            .into_iter()
            .take(max_results)
            .enumerate()
            .map(|(i, r)| {
                SearchResult::new(r.title, r.url, r.description.unwrap_or_default(), (i + 1) as u32)
            })
            .collect()
    }
}

#[async_trait]
impl SearchProvider for BraveSearchClient {
    #[instrument(skip(self), fields(provider = "brave"))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<WebSearchResponse, WebSearchError> {
        let query = normalize_query(query)?;
        let count = max_results.min(BRAVE_MAX_COUNT).to_string();
        let start = Instant::now();

        debug!(count = %count, "Sending Brave Search request");

        let response = self
            .client
            .get(format!("{}/web/search", self.base_url))
            .query(&[
                ("q", query),
                ("count", count.as_str()),
                ("safesearch", self.safe_search.as_str()),
                ("country", self.result_country.as_str()),
            ])
            .header("X-Subscription-Token", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| WebSearchError::from_transport(&e, self.timeout_secs))?;

        let status = response.status();
        debug!(status = %status, "Received Brave Search response");

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after_secs = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse().ok());
                return Err(WebSearchError::RateLimitExceeded { retry_after_secs });
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(WebSearchError::AuthenticationFailed(
                    "Invalid Brave API key".to_string(),
                ));
            },
            s if s.is_server_error() => {
                return Err(WebSearchError::ServiceUnavailable(format!("HTTP {s}")));
            },
            s if !s.is_success() => {
                let error_text = response.text().await.unwrap_or_default();
                return Err(WebSearchError::RequestFailed(format!("HTTP {s}: {error_text}")));
            },
            _ => {},
        }

        let api_response: api::BraveSearchResponse = response
            .json()
            .await
            .map_err(|e| WebSearchError::ParseError(e.to_string()))?;

        let results = Self::convert_results(api_response, max_results);
        let elapsed = start.elapsed();

        let mut response = WebSearchResponse::new(query.to_string(), results, "brave");
        response.search_time_ms = u64::try_from(elapsed.as_millis()).ok();

        debug!(
            results = response.results.len(),
            time_ms = elapsed.as_millis(),
            "Brave Search completed"
        );

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "brave"
    }
}
