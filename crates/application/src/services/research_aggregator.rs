//! Research aggregator - Runs the sources and builds the research document

use std::{fmt, sync::Arc, time::Instant};

use domain::{ResearchDocument, ResearchQuery, SourceOutcome, SourcePolicy};
use tracing::{debug, instrument, warn};

use super::research_sources::ResearchSource;
use crate::error::ApplicationError;

struct ConfiguredSource {
    source: Arc<dyn ResearchSource>,
    policy: SourcePolicy,
}

/// Consults each configured source in document order
///
/// A failing `Optional` source is recorded as skipped; a failing `Mandatory`
/// source aborts aggregation.
#[derive(Default)]
pub struct ResearchAggregator {
    sources: Vec<ConfiguredSource>,
}

impl fmt::Debug for ResearchAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|s| (s.source.kind(), s.policy)))
            .finish()
    }
}

impl ResearchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source; sources are kept in `SourceKind` order regardless of
    /// insertion order
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ResearchSource>, policy: SourcePolicy) -> Self {
        self.sources.push(ConfiguredSource { source, policy });
        self.sources.sort_by_key(|s| s.source.kind());
        self
    }

    /// Number of configured sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Gather research for `query`
    #[instrument(skip(self, query), fields(sources = self.sources.len()))]
    pub async fn aggregate(&self, query: &ResearchQuery) -> Result<ResearchDocument, ApplicationError> {
        let mut outcomes = Vec::with_capacity(self.sources.len());

        for ConfiguredSource { source, policy } in &self.sources {
            let kind = source.kind();
            let start = Instant::now();
            let result = source.fetch(query).await;
            let elapsed_ms = start.elapsed().as_millis();

            let outcome = match result {
                Ok(body) if body.trim().is_empty() => {
                    warn!(source = %kind, "Source returned an empty body, skipping");
                    SourceOutcome::skipped(kind, "empty response")
                },
                Ok(body) => {
                    debug!(source = %kind, chars = body.chars().count(), elapsed_ms, "Source fetched");
                    SourceOutcome::fetched(kind, body)
                },
                Err(e) if policy.is_mandatory() => return Err(e),
                Err(e) => {
                    warn!(source = %kind, error = %e, "Optional source failed, skipping");
                    SourceOutcome::skipped(kind, e.to_string())
                },
            };
            outcomes.push(outcome);
        }

        Ok(ResearchDocument::from_outcomes(outcomes))
    }
}
