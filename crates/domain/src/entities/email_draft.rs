//! Generated email draft

use serde::{Deserialize, Serialize};
use std::fmt;

/// An email body drafted by the language model
///
/// Holds the model's response verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailDraft(String);

impl EmailDraft {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
