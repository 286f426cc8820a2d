#![forbid(unsafe_code)]
//! Wikipedia integration for ResearchDesk
//!
//! Looks up encyclopedia articles through the MediaWiki Action API: a
//! full-text search picks the best matching page titles, then the plain-text
//! introduction of each page is fetched.

mod client;
mod config;
mod error;
mod models;

pub use client::{EncyclopediaClient, WikipediaClient};
pub use config::WikipediaConfig;
pub use error::WikipediaError;
pub use models::Article;
