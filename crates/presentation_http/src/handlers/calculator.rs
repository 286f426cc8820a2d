//! Arithmetic calculator handler

use application::{evaluate, format_number};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Shown for any expression the calculator rejects
pub const INVALID_EXPRESSION: &str = "Invalid expression";

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub expression: String,
    pub result: String,
}

pub async fn calculate(
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    match evaluate(&request.expression) {
        Ok(value) => Ok(Json(CalculateResponse {
            result: format_number(value),
            expression: request.expression,
        })),
        Err(e) => {
            debug!(error = %e, "Rejected expression");
            Err(ApiError::BadRequest(INVALID_EXPRESSION.to_string()))
        },
    }
}
