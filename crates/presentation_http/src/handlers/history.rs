//! Session history handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Topics researched in this session
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Most recent first
    pub topics: Vec<String>,
}

pub async fn list_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let topics = state
        .session
        .topics()
        .iter()
        .map(ToString::to_string)
        .collect();
    Json(HistoryResponse { topics })
}

pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.session.clear_history();
    StatusCode::NO_CONTENT
}
