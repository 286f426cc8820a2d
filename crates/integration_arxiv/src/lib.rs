#![forbid(unsafe_code)]
//! arXiv integration for ResearchDesk
//!
//! Queries the arXiv export API (<https://info.arxiv.org/help/api/>) and
//! parses the returned Atom feed into [`ArxivEntry`] values.

mod client;
mod config;
mod error;
mod feed;

pub use client::{ArxivClient, PreprintClient};
pub use config::ArxivConfig;
pub use error::ArxivError;
pub use feed::ArxivEntry;
