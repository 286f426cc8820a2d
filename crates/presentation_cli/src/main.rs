//! ResearchDesk CLI
//!
//! Runs the research workflow locally and exposes the weather and calculator
//! helpers from the terminal.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::Context;
use application::{evaluate, format_number};
use clap::Parser;
use infrastructure::{
    AppConfig, TelemetryConfig, build_weather_service, build_workflow_service, init_telemetry,
};
use presentation_cli::{
    Cli, Commands, RunOutput,
    cli::{endpoint_url, log_filter_from_verbosity},
};

fn load_config(telemetry: &TelemetryConfig) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    config.telemetry = telemetry.clone();
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries command output; logs go to stderr
    let telemetry = TelemetryConfig {
        log_filter: log_filter_from_verbosity(cli.verbose).to_string(),
        json: false,
    };
    init_telemetry(&telemetry).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Research { topic, report } => {
            let config = load_config(&telemetry)?;
            let workflow = build_workflow_service(&config)
                .context("Failed to build the research workflow")?;

            let result = workflow
                .run(&topic)
                .await
                .context("Research workflow failed")?;

            println!(
                "{}",
                serde_json::to_string_pretty(&RunOutput::from(&result))?
            );

            if let Some(path) = report {
                tokio::fs::write(&path, result.report().to_string())
                    .await
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                eprintln!("Report written to {}", path.display());
            }
        },

        Commands::Weather { city } => {
            let config = load_config(&telemetry)?;
            let weather =
                build_weather_service(&config).context("Failed to build the weather client")?;
            println!("{}", weather.describe_current_weather(city.trim()).await);
        },

        Commands::Calc { expression } => match evaluate(&expression) {
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("Invalid expression: {e}");
                std::process::exit(1);
            },
        },

        Commands::Health { url } => {
            let client = reqwest::Client::new();
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    println!("Healthy");
                },
                Ok(resp) => {
                    println!("Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    println!("Unhealthy: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
