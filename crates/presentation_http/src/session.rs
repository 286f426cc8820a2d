//! Session-scoped state: submitted topics and the latest workflow result
//!
//! Lives only in memory for the lifetime of the server process.

use std::sync::Arc;

use domain::{ResearchHistory, ResearchQuery, WorkflowResult};
use parking_lot::RwLock;

/// Topic history plus the result the export endpoints serve
///
/// Both live behind one lock so the newest topic and the latest result
/// always describe the same run.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    history: ResearchHistory,
    latest: Option<Arc<WorkflowResult>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed run: its topic joins the history and it becomes
    /// the latest result
    pub fn record(&self, result: WorkflowResult) -> Arc<WorkflowResult> {
        let result = Arc::new(result);
        let mut state = self.state.write();
        state.history.record(result.query().clone());
        state.latest = Some(Arc::clone(&result));
        result
    }

    /// Topics, most recent first
    pub fn topics(&self) -> Vec<ResearchQuery> {
        self.state.read().history.newest_first().cloned().collect()
    }

    /// Forget every recorded topic; the latest result stays downloadable
    pub fn clear_history(&self) {
        self.state.write().history.clear();
    }

    pub fn latest(&self) -> Option<Arc<WorkflowResult>> {
        self.state.read().latest.clone()
    }
}
