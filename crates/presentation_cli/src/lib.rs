//! ResearchDesk CLI
//!
//! Argument parsing and terminal rendering for the `researchdesk-cli` binary.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::RunOutput;
