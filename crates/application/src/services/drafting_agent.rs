//! Drafting agent - Writes a business email from the executive summary

use std::{fmt, sync::Arc};

use domain::{EmailDraft, StructuredSummary};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::InferencePort};

/// Prompt built from the executive summary alone
pub fn email_prompt(executive_summary: &str) -> String {
    format!(
        "
Write a short professional business email based on this executive summary:

{executive_summary}

Return only the email body text.
"
    )
}

/// Produces an [`EmailDraft`] from a structured summary
pub struct DraftingAgent {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for DraftingAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftingAgent").finish_non_exhaustive()
    }
}

impl DraftingAgent {
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// One model call; the response text is the email, verbatim
    #[instrument(skip_all)]
    pub async fn draft(&self, summary: &StructuredSummary) -> Result<EmailDraft, ApplicationError> {
        let result = self
            .inference
            .generate(&email_prompt(&summary.executive_summary))
            .await?;

        debug!(model = %result.model, latency_ms = result.latency_ms, "Email drafted");
        Ok(EmailDraft::new(result.content))
    }
}
