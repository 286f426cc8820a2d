//! Web search data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single search result from a web search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    /// Short description of the content
    pub snippet: String,
    /// Host name of the result URL (e.g., "en.wikipedia.org")
    pub source: String,
    /// Position in search results (1-indexed)
    pub position: u32,
}

impl SearchResult {
    /// Create a new search result, deriving `source` from the URL host
    #[must_use]
    pub fn new(title: String, url: String, snippet: String, position: u32) -> Self {
        let source = url::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(ToString::to_string))
            .unwrap_or_else(|| "unknown".to_string());
        Self {
            title,
            url,
            snippet,
            source,
            position,
        }
    }
}

/// Response from a web search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub timestamp: DateTime<Utc>,
    /// Search provider used (e.g., "brave", "duckduckgo")
    pub provider: String,
    /// Time taken for the search in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time_ms: Option<u64>,
}

impl WebSearchResponse {
    /// Create a new search response
    #[must_use]
    pub fn new(query: String, results: Vec<SearchResult>, provider: &str) -> Self {
        Self {
            query,
            results,
            timestamp: Utc::now(),
            provider: provider.to_string(),
            search_time_ms: None,
        }
    }

    /// Check if the response has any results
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_url_host() {
        let result = SearchResult::new(
            "AI in India".to_string(),
            "https://indiaai.gov.in/research".to_string(),
            "Snippet".to_string(),
            1,
        );
        assert_eq!(result.source, "indiaai.gov.in");
    }

    #[test]
    fn unparsable_url_has_unknown_source() {
        let result = SearchResult::new("t".into(), "not a url".into(), String::new(), 1);
        assert_eq!(result.source, "unknown");
    }

    #[test]
    fn empty_response_has_no_results() {
        let response = WebSearchResponse::new("q".into(), vec![], "duckduckgo");
        assert!(!response.has_results());
        assert!(response.search_time_ms.is_none());
    }
}
