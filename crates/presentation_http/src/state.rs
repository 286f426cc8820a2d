//! Application state shared across handlers

use std::sync::Arc;

use application::{WeatherService, WorkflowService};

use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Research pipeline
    pub workflow: Arc<WorkflowService>,
    /// Current-weather lookups
    pub weather: Arc<WeatherService>,
    /// Topic history and the latest result
    pub session: Arc<SessionStore>,
}

impl AppState {
    /// State with an empty session
    pub fn new(workflow: WorkflowService, weather: WeatherService) -> Self {
        Self {
            workflow: Arc::new(workflow),
            weather: Arc::new(weather),
            session: Arc::new(SessionStore::new()),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("workflow", &self.workflow)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
