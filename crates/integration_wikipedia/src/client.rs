//! MediaWiki Action API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    config::WikipediaConfig,
    error::WikipediaError,
    models::{ApiErrorBody, Article, ExtractResponse, SearchResponse},
};

/// Encyclopedia lookup
#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    /// Find up to `top_k` articles matching `query`, best match first
    ///
    /// An empty vector means the search matched nothing usable.
    async fn lookup(&self, query: &str, top_k: usize) -> Result<Vec<Article>, WikipediaError>;
}

/// Wikipedia client backed by the MediaWiki Action API
#[derive(Debug)]
pub struct WikipediaClient {
    client: Client,
    config: WikipediaConfig,
}

impl WikipediaClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: WikipediaConfig) -> Result<Self, WikipediaError> {
        config.validate().map_err(WikipediaError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ResearchDesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WikipediaError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, WikipediaError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| WikipediaError::from_transport(&e, self.config.timeout_secs))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| WikipediaError::ParseError(e.to_string()))
    }

    async fn check_status(response: Response) -> Result<Response, WikipediaError> {
        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(WikipediaError::RateLimitExceeded),
            s if s.is_server_error() => Err(WikipediaError::ServiceUnavailable(format!("HTTP {s}"))),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(WikipediaError::RequestFailed(format!("HTTP {s}: {body}")))
            },
            _ => Ok(response),
        }
    }

    fn api_error(error: Option<ApiErrorBody>) -> Result<(), WikipediaError> {
        match error {
            Some(ApiErrorBody { code, info }) => Err(WikipediaError::ApiError { code, info }),
            None => Ok(()),
        }
    }

    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>, WikipediaError> {
        let limit = limit.to_string();
        let mut response: SearchResponse = self
            .get_json(&[
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
            ])
            .await?;

        Self::api_error(response.error.take())?;
        Ok(response.titles())
    }

    async fn fetch_extracts(&self, titles: &[String]) -> Result<Vec<Article>, WikipediaError> {
        let joined = titles.join("|");
        let mut params = vec![
            ("prop", "extracts|info"),
            ("explaintext", "1"),
            ("inprop", "url"),
            ("titles", joined.as_str()),
        ];
        if self.config.intro_only {
            params.push(("exintro", "1"));
        }

        let mut response: ExtractResponse = self.get_json(&params).await?;
        Self::api_error(response.error.take())?;

        let mut pages = response.query.map(|q| q.pages).unwrap_or_default();
        // The API does not keep the requested order
        pages.sort_by_key(|page| {
            titles
                .iter()
                .position(|t| *t == page.title)
                .unwrap_or(usize::MAX)
        });

        Ok(pages.into_iter().filter_map(|page| page.into_article()).collect())
    }
}

#[async_trait]
impl EncyclopediaClient for WikipediaClient {
    #[instrument(skip(self))]
    async fn lookup(&self, query: &str, top_k: usize) -> Result<Vec<Article>, WikipediaError> {
        let query = query.trim();
        if query.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let titles = self.search_titles(query, top_k).await?;
        debug!(hits = titles.len(), "Wikipedia search completed");
        if titles.is_empty() {
            return Ok(Vec::new());
        }

        let articles = self.fetch_extracts(&titles).await?;
        debug!(articles = articles.len(), "Fetched Wikipedia extracts");
        Ok(articles)
    }
}
