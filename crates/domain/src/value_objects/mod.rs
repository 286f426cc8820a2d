//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod research_query;
mod source_kind;

pub use geo_location::GeoLocation;
pub use research_query::ResearchQuery;
pub use source_kind::{SourceKind, SourcePolicy};
