//! Web search service port

use async_trait::async_trait;
use domain::entities::WebSearchResponse;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for general-purpose web search
///
/// A search that matches nothing is a successful, empty response, not an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WebSearchPort: Send + Sync {
    /// Search the web, returning at most `max_results` results
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<WebSearchResponse, ApplicationError>;

    /// Name of the backend, e.g. "brave" or "duckduckgo"
    fn provider_name(&self) -> String;
}
