//! Research sources - One fetcher per knowledge source
//!
//! Each source turns a query into the plain-text body of its research section.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::{ResearchQuery, SourceKind};
#[cfg(test)]
use mockall::automock;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{EncyclopediaPort, PreprintPort, WebSearchPort},
};

/// Body returned by web search when nothing usable came back
pub const NO_RESEARCH_DATA: &str = "No research data found.";

/// Separator between entries of one source
const ENTRY_SEPARATOR: &str = "\n\n";

/// A knowledge source the research aggregator can consult
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResearchSource: Send + Sync {
    /// Which source this is; fixes label and position in the document
    fn kind(&self) -> SourceKind;

    /// Fetch the section body for `query`
    async fn fetch(&self, query: &ResearchQuery) -> Result<String, ApplicationError>;
}

/// Cut `text` to at most `max_chars` characters
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Web search snippets, one per line
pub struct WebSearchSource {
    search: Arc<dyn WebSearchPort>,
    max_results: u32,
}

impl fmt::Debug for WebSearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSearchSource")
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl WebSearchSource {
    /// Default number of results requested
    pub const DEFAULT_MAX_RESULTS: u32 = 5;

    pub fn new(search: Arc<dyn WebSearchPort>, max_results: u32) -> Self {
        Self {
            search,
            max_results,
        }
    }
}

#[async_trait]
impl ResearchSource for WebSearchSource {
    fn kind(&self) -> SourceKind {
        SourceKind::WebSearch
    }

    #[instrument(skip(self, query), fields(provider = %self.search.provider_name()))]
    async fn fetch(&self, query: &ResearchQuery) -> Result<String, ApplicationError> {
        let response = self.search.search(query.as_str(), self.max_results).await?;
        let body = response.snippets().collect::<Vec<_>>().join("\n");

        debug!(results = response.results.len(), "Web search completed");

        if body.is_empty() {
            return Ok(NO_RESEARCH_DATA.to_string());
        }
        Ok(body)
    }
}

/// Encyclopedia articles rendered as `Page:`/`Summary:` blocks
pub struct EncyclopediaSource {
    encyclopedia: Arc<dyn EncyclopediaPort>,
    top_k: usize,
    max_chars: usize,
}

impl fmt::Debug for EncyclopediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncyclopediaSource")
            .field("top_k", &self.top_k)
            .field("max_chars", &self.max_chars)
            .finish_non_exhaustive()
    }
}

impl EncyclopediaSource {
    pub const DEFAULT_TOP_K: usize = 1;
    pub const DEFAULT_MAX_CHARS: usize = 1500;

    pub fn new(encyclopedia: Arc<dyn EncyclopediaPort>, top_k: usize, max_chars: usize) -> Self {
        Self {
            encyclopedia,
            top_k,
            max_chars,
        }
    }
}

#[async_trait]
impl ResearchSource for EncyclopediaSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Encyclopedia
    }

    #[instrument(skip(self, query))]
    async fn fetch(&self, query: &ResearchQuery) -> Result<String, ApplicationError> {
        let articles = self.encyclopedia.lookup(query.as_str(), self.top_k).await?;
        if articles.is_empty() {
            return Err(ApplicationError::NoContent(format!(
                "no encyclopedia article matches '{query}'"
            )));
        }

        let text = articles
            .iter()
            .take(self.top_k)
            .map(|a| a.to_research_text())
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR);

        debug!(articles = articles.len(), chars = text.chars().count(), "Encyclopedia lookup completed");
        Ok(truncate_chars(&text, self.max_chars).to_string())
    }
}

/// Preprint entries with date, title, authors and abstract
pub struct PreprintSource {
    preprints: Arc<dyn PreprintPort>,
    max_results: usize,
    max_chars: usize,
}

impl fmt::Debug for PreprintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreprintSource")
            .field("max_results", &self.max_results)
            .field("max_chars", &self.max_chars)
            .finish_non_exhaustive()
    }
}

impl PreprintSource {
    pub const DEFAULT_MAX_RESULTS: usize = 2;
    pub const DEFAULT_MAX_CHARS: usize = 2000;

    pub fn new(preprints: Arc<dyn PreprintPort>, max_results: usize, max_chars: usize) -> Self {
        Self {
            preprints,
            max_results,
            max_chars,
        }
    }
}

#[async_trait]
impl ResearchSource for PreprintSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Preprints
    }

    #[instrument(skip(self, query))]
    async fn fetch(&self, query: &ResearchQuery) -> Result<String, ApplicationError> {
        let entries = self.preprints.search(query.as_str(), self.max_results).await?;
        if entries.is_empty() {
            return Err(ApplicationError::NoContent(format!(
                "no preprint matches '{query}'"
            )));
        }

        let text = entries
            .iter()
            .take(self.max_results)
            .map(|p| p.to_research_text())
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR);

        debug!(entries = entries.len(), "Preprint search completed");
        Ok(truncate_chars(&text, self.max_chars).to_string())
    }
}
