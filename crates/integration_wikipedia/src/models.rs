//! MediaWiki API response models

use serde::{Deserialize, Serialize};

/// An encyclopedia article with its plain-text extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub extract: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub info: String,
}

/// `list=search` response (formatversion=2)
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub title: String,
}

impl SearchResponse {
    pub fn titles(self) -> Vec<String> {
        self.query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default()
    }
}

/// `prop=extracts|info` response (formatversion=2)
#[derive(Debug, Deserialize)]
pub(crate) struct ExtractResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub fullurl: Option<String>,
}

impl Page {
    /// Convert into an article; missing pages and blank extracts yield nothing
    pub fn into_article(self) -> Option<Article> {
        if self.missing {
            return None;
        }
        let extract = self.extract?.trim().to_string();
        if extract.is_empty() {
            return None;
        }
        Some(Article {
            title: self.title,
            extract,
            url: self.fullurl,
        })
    }
}
