//! Search provider trait

use async_trait::async_trait;

use crate::{WebSearchError, WebSearchResponse};

/// Trait for web search providers
///
/// A search that completes but finds nothing returns `Ok` with no results.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a web search returning at most `max_results` results
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<WebSearchResponse, WebSearchError>;

    /// Get the provider name (e.g., "brave", "duckduckgo")
    fn provider_name(&self) -> &'static str;
}

/// Reject blank queries before any request is made
pub(crate) fn normalize_query(query: &str) -> Result<&str, WebSearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(WebSearchError::InvalidQuery(
            "Search query cannot be empty".to_string(),
        ));
    }
    Ok(query)
}
