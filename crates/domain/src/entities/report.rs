//! Plain-text research report

use std::fmt;

use chrono::{FixedOffset, Local};

use super::WorkflowResult;

/// Timestamp layout used in the report header, e.g. `18 Oct 2026, 02:30 PM`
pub const REPORT_TIMESTAMP_FORMAT: &str = "%d %b %Y, %I:%M %p";

const RULE: &str = "====================";

/// Full report for a workflow result
///
/// Layout: topic and timestamp header, then RAW RESEARCH, SUMMARY (with one
/// `- item` line per action item) and EMAIL blocks, each framed by rules.
/// The header time is wall-clock time in the machine's local zone.
#[derive(Debug, Clone, Copy)]
pub struct ResearchReport<'a> {
    result: &'a WorkflowResult,
    offset: FixedOffset,
}

impl<'a> ResearchReport<'a> {
    #[must_use]
    pub fn new(result: &'a WorkflowResult) -> Self {
        let offset = *result.timestamp().with_timezone(&Local).offset();
        Self { result, offset }
    }

    /// Render the header time at a fixed UTC offset instead of local time
    #[must_use]
    pub const fn at_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl fmt::Display for ResearchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let summary = result.summary();

        writeln!(f, "Research Topic: {}", result.query())?;
        writeln!(
            f,
            "Generated on: {}",
            result
                .timestamp()
                .with_timezone(&self.offset)
                .format(REPORT_TIMESTAMP_FORMAT)
        )?;
        writeln!(f)?;
        writeln!(f, "{RULE}\nRAW RESEARCH\n{RULE}")?;
        writeln!(f, "{}", result.research())?;
        writeln!(f)?;
        writeln!(f, "{RULE}\nSUMMARY\n{RULE}")?;
        writeln!(f, "{}", summary.executive_summary)?;
        writeln!(f)?;
        writeln!(f, "Action Items:")?;
        for item in &summary.action_items {
            writeln!(f, "- {item}")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{RULE}\nEMAIL\n{RULE}")?;
        writeln!(f, "{}", result.email())
    }
}
