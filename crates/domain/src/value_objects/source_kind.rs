//! Research source identity and failure policy

use serde::{Deserialize, Serialize};
use std::fmt;

/// The knowledge sources the research aggregator can consult
///
/// The declaration order is the order sections appear in a research document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// General-purpose web search
    WebSearch,
    /// Encyclopedia article lookup
    Encyclopedia,
    /// Preprint repository lookup
    Preprints,
}

impl SourceKind {
    /// All sources in canonical document order
    pub const ALL: [Self; 3] = [Self::WebSearch, Self::Encyclopedia, Self::Preprints];

    /// Heading used when the source's body is placed in a research document
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WebSearch => "Web Search",
            Self::Encyclopedia => "Wikipedia",
            Self::Preprints => "arXiv",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the aggregator does when a source fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePolicy {
    /// A failure aborts the whole workflow invocation
    Mandatory,
    /// A failure is recorded as a skipped source
    #[default]
    Optional,
}

impl SourcePolicy {
    /// Default policy per source: web search is mandatory, the rest optional
    #[must_use]
    pub const fn default_for(kind: SourceKind) -> Self {
        match kind {
            SourceKind::WebSearch => Self::Mandatory,
            SourceKind::Encyclopedia | SourceKind::Preprints => Self::Optional,
        }
    }

    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory)
    }
}
