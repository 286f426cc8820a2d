//! Web search adapter - Implements WebSearchPort using integration_websearch

use application::error::ApplicationError;
use application::ports::WebSearchPort;
use async_trait::async_trait;
use domain::entities::{SearchResult, WebSearchResponse};
use integration_websearch::{
    SearchProvider, SearchResult as IntegrationResult, WebSearchClient, WebSearchConfig,
    WebSearchError, WebSearchResponse as IntegrationResponse,
};
use tracing::{debug, instrument};

/// Adapter for web search services using Brave and DuckDuckGo
pub struct WebSearchAdapter {
    client: WebSearchClient,
}

impl std::fmt::Debug for WebSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebSearchAdapter")
            .field("provider", &self.client.provider_name())
            .field("has_brave", &self.client.has_brave())
            .finish()
    }
}

impl WebSearchAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: WebSearchConfig) -> Result<Self, ApplicationError> {
        let client = WebSearchClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration web search error to application error
    fn map_error(err: WebSearchError) -> ApplicationError {
        match err {
            WebSearchError::RequestFailed(e)
            | WebSearchError::ConnectionFailed(e)
            | WebSearchError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WebSearchError::RateLimitExceeded { retry_after_secs } => {
                debug!(retry_after = ?retry_after_secs, "Web search rate limited");
                ApplicationError::RateLimited
            },
            WebSearchError::ParseError(e) => ApplicationError::ExternalService(format!(
                "Unreadable search response: {e}"
            )),
            WebSearchError::ConfigurationError(e) => ApplicationError::Configuration(e),
            WebSearchError::NoResults { query } => {
                ApplicationError::NoContent(format!("No search results for: {query}"))
            },
            WebSearchError::AuthenticationFailed(e) => ApplicationError::NotAuthorized(e),
            WebSearchError::InvalidQuery(e) => ApplicationError::Internal(e),
            WebSearchError::Timeout { timeout_secs } => {
                ApplicationError::ExternalService(format!("Request timed out after {timeout_secs}s"))
            },
        }
    }

    /// Convert integration search result to domain search result
    fn map_result(result: IntegrationResult) -> SearchResult {
        SearchResult::new(result.title, result.url, result.snippet, result.position)
    }

    /// Convert integration search response to domain search response
    fn map_response(response: IntegrationResponse) -> WebSearchResponse {
        WebSearchResponse {
            query: response.query,
            results: response.results.into_iter().map(Self::map_result).collect(),
            timestamp: response.timestamp,
            provider: response.provider,
        }
    }
}

#[async_trait]
impl WebSearchPort for WebSearchAdapter {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<WebSearchResponse, ApplicationError> {
        match self.client.search(query, max_results as usize).await {
            Ok(response) => {
                debug!(
                    provider = %response.provider,
                    results = response.results.len(),
                    search_time_ms = ?response.search_time_ms,
                    "Web search completed"
                );
                Ok(Self::map_response(response))
            },
            // An empty result set is an answer, not a failure
            Err(WebSearchError::NoResults { query }) => {
                debug!("Web search returned no results");
                Ok(WebSearchResponse::new(
                    query,
                    Vec::new(),
                    self.client.provider_name(),
                ))
            },
            Err(e) => Err(Self::map_error(e)),
        }
    }

    fn provider_name(&self) -> String {
        self.client.provider_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_maps_to_rate_limited() {
        let err = WebSearchAdapter::map_error(WebSearchError::RateLimitExceeded {
            retry_after_secs: Some(60),
        });
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn timeouts_are_external_service_errors() {
        let err = WebSearchAdapter::map_error(WebSearchError::Timeout { timeout_secs: 30 });
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn rejected_key_maps_to_not_authorized() {
        let err =
            WebSearchAdapter::map_error(WebSearchError::AuthenticationFailed("bad key".into()));
        assert!(matches!(err, ApplicationError::NotAuthorized(_)));
    }

    #[test]
    fn response_mapping_keeps_result_order() {
        let response = IntegrationResponse::new(
            "rust".to_string(),
            vec![
                IntegrationResult::new("A".into(), "https://a".into(), "first".into(), 1),
                IntegrationResult::new("B".into(), "https://b".into(), "second".into(), 2),
            ],
            "duckduckgo",
        );

        let mapped = WebSearchAdapter::map_response(response);
        assert_eq!(mapped.snippets().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(mapped.provider, "duckduckgo");
    }

    #[test]
    fn creation_with_testing_config() {
        let adapter = WebSearchAdapter::new(WebSearchConfig::for_testing()).unwrap();
        assert_eq!(adapter.provider_name(), "duckduckgo");
    }
}
