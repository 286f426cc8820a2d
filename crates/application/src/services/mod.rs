//! Application services - Use case implementations

mod drafting_agent;
mod research_aggregator;
mod research_sources;
mod structuring_agent;
mod weather_service;
mod workflow_service;

pub use drafting_agent::{DraftingAgent, email_prompt};
pub use research_aggregator::ResearchAggregator;
pub use research_sources::{
    EncyclopediaSource, NO_RESEARCH_DATA, PreprintSource, ResearchSource, WebSearchSource,
};
pub use structuring_agent::{StructuringAgent, structuring_prompt};
pub use weather_service::{CITY_NOT_FOUND, WeatherService};
pub use workflow_service::WorkflowService;
