//! JSON rendering of a workflow run for the terminal

use chrono::{DateTime, Utc};
use domain::{StructuredSummary, WorkflowResult};
use serde::Serialize;

/// What `research` prints: every stage output of one run
#[derive(Debug, Serialize)]
pub struct RunOutput<'a> {
    pub query: String,
    pub generated_at: DateTime<Utc>,
    pub raw_research: String,
    pub raw_summary: &'a StructuredSummary,
    /// `false` when `raw_summary` holds the model's unparsed answer
    pub structured: bool,
    pub final_email: &'a str,
    pub skipped_sources: Vec<&'static str>,
}

impl<'a> From<&'a WorkflowResult> for RunOutput<'a> {
    fn from(result: &'a WorkflowResult) -> Self {
        Self {
            query: result.query().to_string(),
            generated_at: result.timestamp(),
            raw_research: result.research().text(),
            raw_summary: result.summary(),
            structured: result.decoding().is_structured(),
            final_email: result.email().body(),
            skipped_sources: result
                .research()
                .skipped()
                .iter()
                .map(|s| s.source.label())
                .collect(),
        }
    }
}
