//! Encyclopedia lookup port

use async_trait::async_trait;
use domain::entities::EncyclopediaArticle;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for encyclopedia article lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EncyclopediaPort: Send + Sync {
    /// Best matching articles for `query`, at most `top_k`, best first
    async fn lookup(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<EncyclopediaArticle>, ApplicationError>;
}
