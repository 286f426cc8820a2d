//! arXiv adapter - Implements PreprintPort using integration_arxiv

use application::error::ApplicationError;
use application::ports::PreprintPort;
use async_trait::async_trait;
use domain::entities::Preprint;
use integration_arxiv::{ArxivClient, ArxivConfig, ArxivEntry, ArxivError, PreprintClient};
use tracing::{debug, instrument};

/// Adapter for preprint searches against the arXiv export API
#[derive(Debug)]
pub struct ArxivAdapter {
    client: ArxivClient,
}

impl ArxivAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: ArxivConfig) -> Result<Self, ApplicationError> {
        let client =
            ArxivClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: ArxivError) -> ApplicationError {
        match err {
            ArxivError::ConnectionFailed(e)
            | ArxivError::RequestFailed(e)
            | ArxivError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            ArxivError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Unreadable arXiv feed: {e}"))
            },
            ArxivError::ApiError(e) => ApplicationError::ExternalService(format!("arXiv error: {e}")),
            ArxivError::RateLimitExceeded => ApplicationError::RateLimited,
            ArxivError::ConfigurationError(e) => ApplicationError::Configuration(e),
            ArxivError::Timeout(secs) => {
                ApplicationError::ExternalService(format!("Request timed out after {secs}s"))
            },
        }
    }

    fn map_entry(entry: ArxivEntry) -> Preprint {
        Preprint {
            title: entry.title,
            authors: entry.authors,
            summary: entry.summary,
            published: entry.published,
            url: Some(entry.url).filter(|url| !url.is_empty()),
        }
    }
}

#[async_trait]
impl PreprintPort for ArxivAdapter {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Preprint>, ApplicationError> {
        let entries = self
            .client
            .search(query, max_results)
            .await
            .map_err(Self::map_error)?;

        debug!(entries = entries.len(), "Preprint search completed");
        Ok(entries.into_iter().map(Self::map_entry).collect())
    }
}
