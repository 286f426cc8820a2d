//! Current weather handler

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    /// Conditions line, "City not found." or a lookup failure notice
    pub report: String,
}

#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let city = query.city.trim();
    if city.is_empty() {
        return Err(ApiError::BadRequest("Please enter a city.".to_string()));
    }

    let report = state.weather.describe_current_weather(city).await;
    Ok(Json(WeatherResponse {
        city: city.to_string(),
        report,
    }))
}
