//! Web search domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single search result from a web search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Title of the search result
    pub title: String,

    /// URL of the search result
    pub url: String,

    /// Short snippet/description of the content
    pub snippet: String,

    /// Position in search results (1-indexed)
    pub position: u32,
}

impl SearchResult {
    /// Create a new search result
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        position: u32,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            position,
        }
    }

    /// Whether the snippet carries any text
    #[must_use]
    pub fn has_snippet(&self) -> bool {
        !self.snippet.trim().is_empty()
    }
}

/// Response from a web search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchResponse {
    /// Original search query
    pub query: String,

    /// List of search results
    pub results: Vec<SearchResult>,

    /// Timestamp of the search
    pub timestamp: DateTime<Utc>,

    /// Search provider used (e.g., "brave", "duckduckgo")
    pub provider: String,
}

impl WebSearchResponse {
    /// Create a new search response
    #[must_use]
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>, provider: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results,
            timestamp: Utc::now(),
            provider: provider.into(),
        }
    }

    /// Non-empty snippets in result order
    pub fn snippets(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|r| r.has_snippet())
            .map(|r| r.snippet.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(position: u32, snippet: &str) -> SearchResult {
        SearchResult::new(
            format!("Result {position}"),
            format!("https://example.com/{position}"),
            snippet,
            position,
        )
    }

    #[test]
    fn snippets_skip_blank_entries() {
        let response = WebSearchResponse::new(
            "ai",
            vec![result(1, "first"), result(2, "  "), result(3, "third")],
            "duckduckgo",
        );
        let snippets: Vec<_> = response.snippets().collect();
        assert_eq!(snippets, vec!["first", "third"]);
    }

    #[test]
    fn empty_response_has_no_results() {
        let response = WebSearchResponse::new("nothing", vec![], "brave");
        assert!(response.results.is_empty());
        assert_eq!(response.snippets().count(), 0);
    }

    #[test]
    fn response_serializes_provider() {
        let response = WebSearchResponse::new("ai", vec![result(1, "x")], "brave");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"provider\":\"brave\""));
    }
}
