//! Preprint repository port

use async_trait::async_trait;
use domain::entities::Preprint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for searching a preprint repository
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PreprintPort: Send + Sync {
    /// Entries matching `query`, at most `max_results`, in repository order
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Preprint>, ApplicationError>;
}
