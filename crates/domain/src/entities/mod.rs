//! Domain entities - Objects produced and consumed by the research pipeline

mod email_draft;
mod history;
mod reference;
mod report;
mod research;
mod summary;
mod weather;
mod web_search;
mod workflow_result;

pub use email_draft::EmailDraft;
pub use history::ResearchHistory;
pub use reference::{EncyclopediaArticle, Preprint};
pub use report::{REPORT_TIMESTAMP_FORMAT, ResearchReport};
pub use research::{ResearchDocument, ResearchSection, SkippedSource, SourceOutcome};
pub use summary::{StructuredSummary, SummaryDecoding};
pub use weather::CurrentConditions;
pub use web_search::{SearchResult, WebSearchResponse};
pub use workflow_result::WorkflowResult;
