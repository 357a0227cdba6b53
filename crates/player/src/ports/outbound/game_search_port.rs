//! Game Search Port - lookup of games in an external catalog
//!
//! Given free text, returns candidate games. Adapters decide where the
//! candidates come from (a built-in sample list or a remote catalog API).

use async_trait::async_trait;
use legends_domain::Game;

/// Failures of a game search adapter.
#[derive(Debug, thiserror::Error)]
pub enum GameSearchError {
    #[error("game search request failed: {0}")]
    Request(String),

    #[error("game search returned HTTP {0}")]
    Status(u16),

    #[error("could not decode game search response: {0}")]
    Decode(String),

    #[error("game search is not configured")]
    NotConfigured,
}

/// Port for searching the game catalog
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GameSearchPort: Send + Sync {
    /// Games whose name matches `query`
    async fn search(&self, query: &str) -> Result<Vec<Game>, GameSearchError>;
}
