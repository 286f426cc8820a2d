//! Integration tests for CLI
//!
//! These tests exercise argument parsing and the JSON printed by `research`
//! without running any command against live services.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::{ffi::OsString, path::PathBuf};

use chrono::{TimeZone, Utc};
use clap::Parser;
use domain::{
    EmailDraft, ResearchDocument, ResearchQuery, SourceKind, SourceOutcome, SummaryDecoding,
    WorkflowResult,
};
use presentation_cli::{Cli, Commands, RunOutput};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

fn india_run(summary: &str) -> WorkflowResult {
    WorkflowResult::generated_at(
        ResearchQuery::new("Latest AI trends in India").unwrap(),
        ResearchDocument::from_outcomes(vec![
            SourceOutcome::fetched(
                SourceKind::WebSearch,
                "AI startups in Bengaluru raised record funding\nGovernment launches IndiaAI compute portal",
            ),
            SourceOutcome::skipped(SourceKind::Encyclopedia, "Service unavailable: HTTP 503"),
            SourceOutcome::fetched(
                SourceKind::Preprints,
                "Title: AI Adoption in Indian Agriculture\nAuthors: Meera Iyer",
            ),
        ]),
        SummaryDecoding::decode(summary),
        EmailDraft::new("Dear Team, ..."),
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap(),
    )
}

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn cli_parses_research_command() {
    let cli = parse_args(&["researchdesk-cli", "research", "Latest AI trends in India"]).unwrap();
    if let Commands::Research { topic, report } = cli.command {
        assert_eq!(topic, "Latest AI trends in India");
        assert!(report.is_none());
    } else {
        panic!("Expected Research command");
    }
}

#[test]
fn cli_parses_research_with_report_path() {
    let cli = parse_args(&[
        "researchdesk-cli",
        "research",
        "solar power",
        "-r",
        "out/report.txt",
    ])
    .unwrap();
    if let Commands::Research { report, .. } = cli.command {
        assert_eq!(report, Some(PathBuf::from("out/report.txt")));
    } else {
        panic!("Expected Research command");
    }
}

#[test]
fn cli_parses_weather_command() {
    let cli = parse_args(&["researchdesk-cli", "weather", "Pune"]).unwrap();
    if let Commands::Weather { city } = cli.command {
        assert_eq!(city, "Pune");
    } else {
        panic!("Expected Weather command");
    }
}

#[test]
fn cli_parses_calc_command() {
    let cli = parse_args(&["researchdesk-cli", "calc", "(2 + 3) * 4"]).unwrap();
    if let Commands::Calc { expression } = cli.command {
        assert_eq!(expression, "(2 + 3) * 4");
    } else {
        panic!("Expected Calc command");
    }
}

#[test]
fn cli_health_uses_default_url() {
    let cli = parse_args(&["researchdesk-cli", "health"]).unwrap();
    if let Commands::Health { url } = cli.command {
        assert_eq!(url, "http://localhost:3000");
    } else {
        panic!("Expected Health command");
    }
}

#[test]
fn cli_health_with_custom_url() {
    let cli = parse_args(&["researchdesk-cli", "health", "--url", "http://api:9000"]).unwrap();
    assert!(matches!(cli.command, Commands::Health { url } if url == "http://api:9000"));
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["researchdesk-cli", "-vvv", "calc", "1"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["researchdesk-cli"]).is_err());
}

#[test]
fn cli_research_requires_topic() {
    assert!(parse_args(&["researchdesk-cli", "research"]).is_err());
}

#[test]
fn cli_weather_requires_city() {
    assert!(parse_args(&["researchdesk-cli", "weather"]).is_err());
}

// =============================================================================
// Research output
// =============================================================================

#[test]
fn research_output_carries_every_stage() {
    let result = india_run(
        r#"{"executive_summary": "India's AI market is growing quickly.", "action_items": ["Track the national AI mission"]}"#,
    );
    let value = serde_json::to_value(RunOutput::from(&result)).unwrap();

    assert_eq!(value["query"], "Latest AI trends in India");
    assert_eq!(value["generated_at"], "2026-10-18T09:30:00Z");
    assert!(
        value["raw_research"]
            .as_str()
            .unwrap()
            .starts_with("Web Search:\nAI startups in Bengaluru")
    );
    assert_eq!(
        value["raw_summary"]["executive_summary"],
        "India's AI market is growing quickly."
    );
    assert_eq!(value["structured"], true);
    assert_eq!(value["final_email"], "Dear Team, ...");
    assert_eq!(value["skipped_sources"], serde_json::json!(["Wikipedia"]));
}

#[test]
fn research_output_marks_unstructured_summary() {
    let result = india_run("Sure! Here is a summary.");
    let value = serde_json::to_value(RunOutput::from(&result)).unwrap();

    assert_eq!(value["structured"], false);
    assert_eq!(
        value["raw_summary"]["executive_summary"],
        "Sure! Here is a summary."
    );
    assert_eq!(value["raw_summary"]["action_items"], serde_json::json!([]));
}
