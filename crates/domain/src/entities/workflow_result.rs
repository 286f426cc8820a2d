//! Result of one workflow invocation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EmailDraft, ResearchDocument, ResearchReport, StructuredSummary, SummaryDecoding};
use crate::value_objects::ResearchQuery;

/// Everything one pipeline run produced
///
/// Created once per invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    query: ResearchQuery,
    research: ResearchDocument,
    summary: SummaryDecoding,
    email: EmailDraft,
    generated_at: DateTime<Utc>,
}

impl WorkflowResult {
    /// Assemble a result stamped with the current time
    #[must_use]
    pub fn new(
        query: ResearchQuery,
        research: ResearchDocument,
        summary: SummaryDecoding,
        email: EmailDraft,
    ) -> Self {
        Self::generated_at(query, research, summary, email, Utc::now())
    }

    /// Assemble a result with an explicit timestamp
    #[must_use]
    pub const fn generated_at(
        query: ResearchQuery,
        research: ResearchDocument,
        summary: SummaryDecoding,
        email: EmailDraft,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            query,
            research,
            summary,
            email,
            generated_at,
        }
    }

    #[must_use]
    pub const fn query(&self) -> &ResearchQuery {
        &self.query
    }

    #[must_use]
    pub const fn research(&self) -> &ResearchDocument {
        &self.research
    }

    #[must_use]
    pub const fn decoding(&self) -> &SummaryDecoding {
        &self.summary
    }

    #[must_use]
    pub const fn summary(&self) -> &StructuredSummary {
        self.summary.summary()
    }

    #[must_use]
    pub const fn email(&self) -> &EmailDraft {
        &self.email
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Plain-text report combining every section
    #[must_use]
    pub fn report(&self) -> ResearchReport<'_> {
        ResearchReport::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceKind, SourceOutcome};

    #[test]
    fn exposes_every_stage_output() {
        let result = WorkflowResult::new(
            ResearchQuery::new("topic").unwrap(),
            ResearchDocument::from_outcomes([SourceOutcome::fetched(SourceKind::WebSearch, "w")]),
            SummaryDecoding::decode(r#"{"executive_summary": "S", "action_items": []}"#),
            EmailDraft::new("Dear Team,"),
        );

        assert_eq!(result.query().as_str(), "topic");
        assert_eq!(result.research().text(), "Web Search:\nw");
        assert_eq!(result.summary().executive_summary, "S");
        assert!(result.decoding().is_structured());
        assert_eq!(result.email().body(), "Dear Team,");
    }
}
