//! Wikipedia adapter - Implements EncyclopediaPort using integration_wikipedia

use application::error::ApplicationError;
use application::ports::EncyclopediaPort;
use async_trait::async_trait;
use domain::entities::EncyclopediaArticle;
use integration_wikipedia::{
    Article, EncyclopediaClient, WikipediaClient, WikipediaConfig, WikipediaError,
};
use tracing::{debug, instrument};

/// Adapter for encyclopedia lookups against MediaWiki
#[derive(Debug)]
pub struct WikipediaAdapter {
    client: WikipediaClient,
}

impl WikipediaAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: WikipediaConfig) -> Result<Self, ApplicationError> {
        let client = WikipediaClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: WikipediaError) -> ApplicationError {
        match err {
            WikipediaError::ConnectionFailed(e)
            | WikipediaError::RequestFailed(e)
            | WikipediaError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WikipediaError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Unreadable MediaWiki response: {e}"))
            },
            WikipediaError::ApiError { code, info } => {
                ApplicationError::ExternalService(format!("MediaWiki error {code}: {info}"))
            },
            WikipediaError::RateLimitExceeded => ApplicationError::RateLimited,
            WikipediaError::ConfigurationError(e) => ApplicationError::Configuration(e),
            WikipediaError::Timeout(secs) => {
                ApplicationError::ExternalService(format!("Request timed out after {secs}s"))
            },
        }
    }

    fn map_article(article: Article) -> EncyclopediaArticle {
        let mapped = EncyclopediaArticle::new(article.title, article.extract);
        match article.url {
            Some(url) => mapped.with_url(url),
            None => mapped,
        }
    }
}

#[async_trait]
impl EncyclopediaPort for WikipediaAdapter {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn lookup(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<EncyclopediaArticle>, ApplicationError> {
        let articles = self
            .client
            .lookup(query, top_k)
            .await
            .map_err(Self::map_error)?;

        debug!(articles = articles.len(), "Encyclopedia lookup completed");
        Ok(articles.into_iter().map(Self::map_article).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_name_the_code() {
        let err = WikipediaAdapter::map_error(WikipediaError::ApiError {
            code: "maxlag".to_string(),
            info: "Waiting for replicas".to_string(),
        });
        assert!(err.to_string().contains("maxlag"));
    }

    #[test]
    fn rate_limit_maps_to_rate_limited() {
        assert!(matches!(
            WikipediaAdapter::map_error(WikipediaError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
    }

    #[test]
    fn article_url_is_carried_over() {
        let article = Article {
            title: "Rust".to_string(),
            extract: "A language.".to_string(),
            url: Some("https://en.wikipedia.org/wiki/Rust".to_string()),
        };
        let mapped = WikipediaAdapter::map_article(article);
        assert_eq!(mapped.url.as_deref(), Some("https://en.wikipedia.org/wiki/Rust"));
        assert_eq!(mapped.to_research_text(), "Page: Rust\nSummary: A language.");
    }
}
