//! Research handler - runs the workflow for one topic

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use domain::WorkflowResult;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Shown when the submitted topic is blank
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic before starting.";

/// Research request body
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub topic: String,
}

/// Summary section of a research response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryBody {
    pub executive_summary: String,
    pub action_items: Vec<String>,
    /// `false` when the model's answer was not the expected JSON and the
    /// executive summary holds its raw text
    pub structured: bool,
}

/// A source that contributed nothing to the research text
#[derive(Debug, Serialize, Deserialize)]
pub struct SkippedSourceBody {
    pub source: String,
    pub reason: String,
}

/// Research response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub topic: String,
    pub generated_at: DateTime<Utc>,
    pub raw_research: String,
    pub summary: SummaryBody,
    pub email: String,
    pub skipped_sources: Vec<SkippedSourceBody>,
}

impl From<&WorkflowResult> for ResearchResponse {
    fn from(result: &WorkflowResult) -> Self {
        let summary = result.summary();
        Self {
            topic: result.query().to_string(),
            generated_at: result.timestamp(),
            raw_research: result.research().text(),
            summary: SummaryBody {
                executive_summary: summary.executive_summary.clone(),
                action_items: summary.action_items.clone(),
                structured: result.decoding().is_structured(),
            },
            email: result.email().body().to_string(),
            skipped_sources: result
                .research()
                .skipped()
                .iter()
                .map(|s| SkippedSourceBody {
                    source: s.source.label().to_string(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

/// Run the research workflow for a topic
///
/// A successful run is added to the session history and becomes the result
/// served by the export endpoints.
#[instrument(skip(state, request), fields(topic_len = request.topic.len()))]
pub async fn run_research(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, ApiError> {
    if request.topic.trim().is_empty() {
        return Err(ApiError::BadRequest(EMPTY_TOPIC_MESSAGE.to_string()));
    }

    let result = state.workflow.run(&request.topic).await?;
    let result = state.session.record(result);

    info!(
        skipped = result.research().skipped().len(),
        structured = result.decoding().is_structured(),
        "Research completed"
    );

    Ok(Json(ResearchResponse::from(result.as_ref())))
}
