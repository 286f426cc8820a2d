//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ResearchDesk CLI
#[derive(Debug, Parser)]
#[command(name = "researchdesk-cli")]
#[command(author, version, about = "ResearchDesk research assistant CLI", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Research a topic and print every stage output as JSON
    ///
    /// Example: researchdesk-cli research "Latest AI trends in India" --report report.txt
    Research {
        /// Topic to research
        topic: String,

        /// Also write the plain-text report to this file
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Show current temperature and wind for a city
    Weather {
        /// City name
        city: String,
    },

    /// Evaluate an arithmetic expression
    Calc {
        /// Expression, e.g. "(2 + 3) * 4"
        expression: String,
    },

    /// Check server health
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
