//! Structured summary produced by the structuring stage

use serde::{Deserialize, Deserializer, Serialize};

/// Executive summary plus follow-up actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSummary {
    pub executive_summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action_items: Vec<String>,
}

impl StructuredSummary {
    #[must_use]
    pub fn new(executive_summary: impl Into<String>, action_items: Vec<String>) -> Self {
        Self {
            executive_summary: executive_summary.into(),
            action_items,
        }
    }

    /// A summary holding the model's raw output and no action items
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self::new(raw, Vec::new())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome of decoding model output into a [`StructuredSummary`]
///
/// Decoding never fails: output that does not match the expected JSON shape
/// becomes `RawFallback`, whose executive summary is the untouched model text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decoding", content = "summary", rename_all = "snake_case")]
pub enum SummaryDecoding {
    Structured(StructuredSummary),
    RawFallback(StructuredSummary),
}

impl SummaryDecoding {
    /// Decode a model response
    ///
    /// Accepts a bare JSON object or one wrapped in a Markdown code fence.
    /// The object needs a string `executive_summary`; `action_items` may be
    /// absent or null.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(strip_code_fence(raw))
            .ok()
            .filter(serde_json::Value::is_object)
            .and_then(|value| serde_json::from_value::<StructuredSummary>(value).ok());

        match parsed {
            Some(summary) => Self::Structured(summary),
            None => Self::RawFallback(StructuredSummary::from_raw(raw)),
        }
    }

    #[must_use]
    pub const fn summary(&self) -> &StructuredSummary {
        match self {
            Self::Structured(summary) | Self::RawFallback(summary) => summary,
        }
    }

    #[must_use]
    pub fn into_summary(self) -> StructuredSummary {
        match self {
            Self::Structured(summary) | Self::RawFallback(summary) => summary,
        }
    }

    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Strip a surrounding ```` ``` ```` fence and its optional language tag
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    match inner.split_once('\n') {
        Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body.trim(),
        _ => inner.trim(),
    }
}
