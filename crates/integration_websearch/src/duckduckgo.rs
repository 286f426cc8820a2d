//! DuckDuckGo HTML search client
//!
//! Keyless text search against the HTML endpoint (<https://html.duckduckgo.com/html/>).
//! Each organic `div.result` block yields a title, a target URL and a snippet;
//! sponsored blocks are dropped.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    WebSearchResponse, config::WebSearchConfig, error::WebSearchError, models::SearchResult,
    provider::{SearchProvider, normalize_query},
};

/// Result links point at a redirector carrying the target in `uddg`
const REDIRECT_PATH: &str = "/l/";
const REDIRECT_PARAM: &str = "uddg";

/// DuckDuckGo HTML search client
#[derive(Debug)]
pub struct DuckDuckGoClient {
    client: Client,
    base_url: String,
    safe_search: &'static str,
    timeout_secs: u64,
}

/// Map the configured safe search level to DuckDuckGo's `kp` parameter
fn safe_search_param(level: &str) -> &'static str {
    match level {
        "strict" => "1",
        "off" => "-2",
        _ => "-1",
    }
}

fn selector(css: &str) -> Result<Selector, WebSearchError> {
    Selector::parse(css).map_err(|e| WebSearchError::ParseError(format!("selector {css}: {e}")))
}

/// Collapse the text of an element into single-spaced words
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a result link to the page it points at
///
/// Redirector links are unwrapped; anything that is not http(s) is dropped.
fn resolve_href(href: &str) -> Option<String> {
    let base = Url::parse("https://duckduckgo.com/").ok()?;
    let url = base.join(href).ok()?;

    let is_redirect = url
        .host_str()
        .is_some_and(|host| host.ends_with("duckduckgo.com"))
        && url.path() == REDIRECT_PATH;
    if is_redirect {
        let target = url
            .query_pairs()
            .find(|(key, _)| key == REDIRECT_PARAM)
            .map(|(_, value)| value.into_owned())?;
        return resolve_href(&target).filter(|_| target.starts_with("http"));
    }

    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// Extract organic results from a results page, best match first
fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchResult>, WebSearchError> {
    let result_selector = selector("div.result")?;
    let link_selector = selector("a.result__a")?;
    let snippet_selector = selector(".result__snippet")?;

    let document = Html::parse_document(html);
    let mut entries: Vec<(String, String, String)> = Vec::new();

    for block in document.select(&result_selector) {
        if entries.len() == max_results {
            break;
        }
        if block.value().classes().any(|class| class == "result--ad") {
            continue;
        }

        let Some(link) = block.select(&link_selector).next() else {
            continue;
        };
        let Some(url) = link.value().attr("href").and_then(resolve_href) else {
            continue;
        };
        let title = element_text(link);
        if title.is_empty() {
            continue;
        }
        let snippet = block
            .select(&snippet_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        entries.push((title, url, snippet));
    }

    Ok(entries
        .into_iter()
        .zip(1u32..)
        .map(|((title, url, snippet), position)| SearchResult::new(title, url, snippet, position))
        .collect())
}

impl DuckDuckGoClient {
    /// Create a new DuckDuckGo client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &WebSearchConfig) -> Result<Self, WebSearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ResearchDesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WebSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.duckduckgo_base_url.trim_end_matches('/').to_string(),
            safe_search: safe_search_param(&config.safe_search),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    #[instrument(skip(self), fields(provider = "duckduckgo"))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<WebSearchResponse, WebSearchError> {
        let query = normalize_query(query)?;
        let start = Instant::now();

        debug!("Sending DuckDuckGo request");

        let response = self
            .client
            .get(format!("{}/html/", self.base_url))
            .query(&[("q", query), ("kp", self.safe_search)])
            .send()
            .await
            .map_err(|e| WebSearchError::from_transport(&e, self.timeout_secs))?;

        let status = response.status();
        debug!(status = %status, "Received DuckDuckGo response");

        // 202 carries a bot challenge instead of results
        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::ACCEPTED {
            warn!(status = %status, "DuckDuckGo is throttling requests");
            return Err(WebSearchError::RateLimitExceeded {
                retry_after_secs: None,
            });
        }

        if status.is_server_error() {
            return Err(WebSearchError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WebSearchError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebSearchError::ParseError(e.to_string()))?;
        let results = parse_results(&body, max_results)?;

        let elapsed = start.elapsed();
        let mut response = WebSearchResponse::new(query.to_string(), results, "duckduckgo");
        response.search_time_ms = u64::try_from(elapsed.as_millis()).ok();

        debug!(
            results = response.results.len(),
            time_ms = elapsed.as_millis(),
            "DuckDuckGo search completed"
        );

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "duckduckgo"
    }
}
