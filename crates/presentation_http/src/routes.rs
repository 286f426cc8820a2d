//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Browser front end
        .route("/", get(handlers::page::index))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Research API (v1)
        .route("/v1/research", post(handlers::research::run_research))
        .route(
            "/v1/history",
            get(handlers::history::list_history).delete(handlers::history::clear_history),
        )
        .route("/v1/exports/{kind}", get(handlers::exports::download))
        // Helpers (v1)
        .route("/v1/weather", get(handlers::weather::current_weather))
        .route("/v1/calculate", post(handlers::calculator::calculate))
        // Attach state
        .with_state(state)
}
