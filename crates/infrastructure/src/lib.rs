//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the
//! integration crates, loads the layered configuration, sets up tracing and
//! wires the research workflow together.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod wiring;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigError, ConfigSources, InferenceAppConfig, ServerConfig, WebSearchAppConfig,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use wiring::{build_weather_service, build_workflow_service};
