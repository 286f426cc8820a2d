//! Reference material returned by encyclopedia and preprint lookups

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A plain-text encyclopedia article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncyclopediaArticle {
    pub title: String,
    /// Plain-text introduction of the article
    pub extract: String,
    pub url: Option<String>,
}

impl EncyclopediaArticle {
    #[must_use]
    pub fn new(title: impl Into<String>, extract: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
            url: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Render as a research snippet: `Page: <title>` then `Summary: <extract>`
    #[must_use]
    pub fn to_research_text(&self) -> String {
        format!("Page: {}\nSummary: {}", self.title, self.extract.trim())
    }
}

/// A preprint entry from a scholarly repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preprint {
    pub title: String,
    pub authors: Vec<String>,
    /// Abstract text
    pub summary: String,
    pub published: Option<NaiveDate>,
    pub url: Option<String>,
}

impl Preprint {
    /// Render as a research snippet with publication date, title, authors and abstract
    #[must_use]
    pub fn to_research_text(&self) -> String {
        let published = self
            .published
            .map_or_else(|| "unknown".to_string(), |d| d.format("%Y-%m-%d").to_string());
        format!(
            "Published: {published}\nTitle: {}\nAuthors: {}\nSummary: {}",
            collapse_whitespace(&self.title),
            self.authors.join(", "),
            collapse_whitespace(&self.summary),
        )
    }
}

/// Atom feeds wrap titles and abstracts across lines
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
