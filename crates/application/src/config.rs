//! Research pipeline settings
//!
//! Which sources the aggregator consults and what a failure of each means.

use domain::{SourceKind, SourcePolicy};
use serde::{Deserialize, Serialize};

/// Settings for one research source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Consult this source at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Failure policy; unset means the source's default policy
    #[serde(default)]
    pub policy: Option<SourcePolicy>,
}

const fn default_enabled() -> bool {
    true
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            policy: None,
        }
    }
}

/// Per-source settings for the research aggregator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchConfig {
    #[serde(default)]
    pub web_search: SourceSettings,

    #[serde(default)]
    pub encyclopedia: SourceSettings,

    #[serde(default)]
    pub preprints: SourceSettings,
}

impl ResearchConfig {
    #[must_use]
    pub const fn settings(&self, kind: SourceKind) -> &SourceSettings {
        match kind {
            SourceKind::WebSearch => &self.web_search,
            SourceKind::Encyclopedia => &self.encyclopedia,
            SourceKind::Preprints => &self.preprints,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, kind: SourceKind) -> bool {
        self.settings(kind).enabled
    }

    /// Effective policy for a source
    #[must_use]
    pub fn policy(&self, kind: SourceKind) -> SourcePolicy {
        self.settings(kind)
            .policy
            .unwrap_or_else(|| SourcePolicy::default_for(kind))
    }
}
