//! Domain layer for ResearchDesk
//!
//! Contains the research pipeline's entities, value objects, and domain errors.
//! This layer performs no I/O and defines the ubiquitous language shared by
//! every other crate.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
