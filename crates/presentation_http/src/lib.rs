//! ResearchDesk HTTP presentation layer
//!
//! JSON API and a single static page in front of the research workflow,
//! plus the weather and calculator helpers.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use session::SessionStore;
pub use state::AppState;
