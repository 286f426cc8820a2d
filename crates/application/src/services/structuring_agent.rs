//! Structuring agent - Compresses research into an executive summary and actions

use std::{fmt, sync::Arc};

use domain::{ResearchDocument, SummaryDecoding};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::InferencePort};

/// Prompt asking for exactly `executive_summary` and `action_items`
pub fn structuring_prompt(research: &str) -> String {
    format!(
        r#"
Convert the following research notes into structured JSON:

Research:
{research}

Return JSON EXACTLY like:
{{
   "executive_summary": "...",
   "action_items": ["...", "..."]
}}
"#
    )
}

/// Turns a research document into a [`SummaryDecoding`]
pub struct StructuringAgent {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for StructuringAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuringAgent")
            .field("model", &self.inference.current_model())
            .finish_non_exhaustive()
    }
}

impl StructuringAgent {
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// One model call; malformed output degrades to a raw-text summary
    #[instrument(skip(self, research), fields(research_chars = research.text().len()))]
    pub async fn summarize(
        &self,
        research: &ResearchDocument,
    ) -> Result<SummaryDecoding, ApplicationError> {
        let prompt = structuring_prompt(&research.text());
        let result = self.inference.generate(&prompt).await?;

        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            latency_ms = result.latency_ms,
            "Structuring response received"
        );

        let decoding = SummaryDecoding::decode(&result.content);
        if !decoding.is_structured() {
            warn!("Model output was not the expected JSON, using raw text as summary");
        }
        Ok(decoding)
    }
}
