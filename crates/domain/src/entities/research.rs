//! Research document assembled from per-source outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::SourceKind;

/// Separator placed between labeled sections
const SECTION_SEPARATOR: &str = "\n\n";

/// Text contributed by one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSection {
    pub source: SourceKind,
    pub body: String,
}

impl ResearchSection {
    /// Render as `"<label>:\n<body>"`
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}:\n{}", self.source.label(), self.body)
    }
}

/// A source that contributed nothing, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSource {
    pub source: SourceKind,
    pub reason: String,
}

/// Result of consulting a single source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    Fetched(ResearchSection),
    Skipped(SkippedSource),
}

impl SourceOutcome {
    #[must_use]
    pub fn fetched(source: SourceKind, body: impl Into<String>) -> Self {
        Self::Fetched(ResearchSection {
            source,
            body: body.into(),
        })
    }

    #[must_use]
    pub fn skipped(source: SourceKind, reason: impl Into<String>) -> Self {
        Self::Skipped(SkippedSource {
            source,
            reason: reason.into(),
        })
    }

    #[must_use]
    pub const fn source(&self) -> SourceKind {
        match self {
            Self::Fetched(section) => section.source,
            Self::Skipped(skipped) => skipped.source,
        }
    }
}

/// The concatenated research gathered for one query
///
/// Sections keep the order in which outcomes were supplied. Skipped sources
/// are remembered but never appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchDocument {
    sections: Vec<ResearchSection>,
    skipped: Vec<SkippedSource>,
}

impl ResearchDocument {
    /// Build a document from outcomes in source order
    #[must_use]
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = SourceOutcome>) -> Self {
        let mut document = Self::default();
        for outcome in outcomes {
            match outcome {
                SourceOutcome::Fetched(section) => document.sections.push(section),
                SourceOutcome::Skipped(skipped) => document.skipped.push(skipped),
            }
        }
        document
    }

    #[must_use]
    pub fn sections(&self) -> &[ResearchSection] {
        &self.sections
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedSource] {
        &self.skipped
    }

    /// True when no source contributed text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Labeled sections joined by a blank line
    #[must_use]
    pub fn text(&self) -> String {
        self.sections
            .iter()
            .map(ResearchSection::render)
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR)
    }
}

impl fmt::Display for ResearchDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
