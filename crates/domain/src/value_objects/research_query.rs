//! Research query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// The topic a user asks the pipeline to research
///
/// Always trimmed and never empty. This is the only external input a
/// workflow invocation receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResearchQuery(String);

impl ResearchQuery {
    /// Create a query from raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyQuery` if the input is blank after trimming
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the query in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for ResearchQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResearchQuery> for String {
    fn from(query: ResearchQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for ResearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let query = ResearchQuery::new("  Latest AI trends in India \n").unwrap();
        assert_eq!(query.as_str(), "Latest AI trends in India");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            ResearchQuery::new(""),
            Err(DomainError::EmptyQuery)
        ));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert!(ResearchQuery::new("   \t\n").is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let query = ResearchQuery::new("Zürich").unwrap();
        assert_eq!(query.char_len(), 6);
    }

    #[test]
    fn display_matches_inner_text() {
        let query = ResearchQuery::new("rust async").unwrap();
        assert_eq!(query.to_string(), "rust async");
    }

    #[test]
    fn serializes_as_plain_string() {
        let query = ResearchQuery::new("quantum computing").unwrap();
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, "\"quantum computing\"");
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<ResearchQuery, _> = serde_json::from_str("\" solar \"");
        assert_eq!(ok.unwrap().as_str(), "solar");

        let blank: Result<ResearchQuery, _> = serde_json::from_str("\"  \"");
        assert!(blank.is_err());
    }
}
