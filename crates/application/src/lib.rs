//! Application layer - Use cases and orchestration
//!
//! Holds the research pipeline: source fetchers, the aggregator, the two
//! model-backed agents and the workflow that chains them. External systems are
//! reached only through the traits in [`ports`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod ports;
pub mod services;

pub use calculator::{CalculatorError, evaluate, format_number};
pub use config::{ResearchConfig, SourceSettings};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
