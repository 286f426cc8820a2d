//! Workflow service - Research, structure, draft

use std::{fmt, time::Instant};

use domain::{ResearchQuery, WorkflowResult};
use tracing::{debug, info, instrument};

use super::{DraftingAgent, ResearchAggregator, StructuringAgent};
use crate::error::ApplicationError;

/// Runs one pipeline invocation end to end
///
/// Stages run strictly one after another. Errors from a mandatory source or
/// either model call end the run with no partial result.
pub struct WorkflowService {
    aggregator: ResearchAggregator,
    structuring: StructuringAgent,
    drafting: DraftingAgent,
}

impl fmt::Debug for WorkflowService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowService")
            .field("aggregator", &self.aggregator)
            .finish_non_exhaustive()
    }
}

impl WorkflowService {
    pub const fn new(
        aggregator: ResearchAggregator,
        structuring: StructuringAgent,
        drafting: DraftingAgent,
    ) -> Self {
        Self {
            aggregator,
            structuring,
            drafting,
        }
    }

    /// Validate `topic` and run the pipeline
    pub async fn run(&self, topic: &str) -> Result<WorkflowResult, ApplicationError> {
        let query = ResearchQuery::new(topic)?;
        self.run_query(query).await
    }

    #[instrument(skip_all, fields(query_len = query.char_len()))]
    pub async fn run_query(&self, query: ResearchQuery) -> Result<WorkflowResult, ApplicationError> {
        let started = Instant::now();

        let stage = Instant::now();
        let research = self.aggregator.aggregate(&query).await?;
        debug!(
            elapsed_ms = stage.elapsed().as_millis(),
            sections = research.sections().len(),
            skipped = research.skipped().len(),
            "Research stage finished"
        );

        let stage = Instant::now();
        let summary = self.structuring.summarize(&research).await?;
        debug!(
            elapsed_ms = stage.elapsed().as_millis(),
            structured = summary.is_structured(),
            "Structuring stage finished"
        );

        let stage = Instant::now();
        let email = self.drafting.draft(summary.summary()).await?;
        debug!(elapsed_ms = stage.elapsed().as_millis(), "Drafting stage finished");

        info!(elapsed_ms = started.elapsed().as_millis(), "Workflow completed");
        Ok(WorkflowResult::new(query, research, summary, email))
    }
}
