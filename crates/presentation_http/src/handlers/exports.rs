//! Plain-text downloads of the session's latest result

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use domain::WorkflowResult;

use crate::{error::ApiError, state::AppState};

/// One downloadable view of a workflow result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Research,
    Summary,
    Email,
    Report,
}

impl ExportKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "research" => Some(Self::Research),
            "summary" => Some(Self::Summary),
            "email" => Some(Self::Email),
            "report" => Some(Self::Report),
            _ => None,
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Research => "research.txt",
            Self::Summary => "summary.txt",
            Self::Email => "generated_email.txt",
            Self::Report => "research_report.txt",
        }
    }

    /// File contents; the summary export is the executive summary alone
    pub fn render(self, result: &WorkflowResult) -> String {
        match self {
            Self::Research => result.research().text(),
            Self::Summary => result.summary().executive_summary.clone(),
            Self::Email => result.email().body().to_string(),
            Self::Report => result.report().to_string(),
        }
    }
}

pub async fn download(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = ExportKind::parse(&kind)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown export '{kind}'")))?;
    let result = state
        .session
        .latest()
        .ok_or_else(|| ApiError::NotFound("No research result yet".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.file_name()),
            ),
        ],
        kind.render(&result),
    ))
}
