//! Game catalog search adapters
//!
//! `igdb` talks to the real catalog when credentials are configured.
//! `stub` answers from a small built-in list otherwise, so realm search
//! works offline and in tests.

pub mod igdb;
pub mod stub;

use std::sync::Arc;

use crate::ports::outbound::GameSearchPort;

pub use igdb::{IgdbConfig, IgdbGameSearch};
pub use stub::StubGameSearch;

/// Pick the search adapter for this configuration.
pub fn create_game_search(config: &IgdbConfig) -> Arc<dyn GameSearchPort> {
    if config.is_configured() {
        tracing::info!(
            proxied = config.proxy_url.is_some(),
            "Using IGDB game search"
        );
        Arc::new(IgdbGameSearch::new(config.clone()))
    } else {
        tracing::info!("IGDB credentials not configured, using built-in game search");
        Arc::new(StubGameSearch::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_search_falls_back_to_stub() {
        let search = create_game_search(&IgdbConfig::default());

        let games = search.search("witcher").await.unwrap();

        assert!(!games.is_empty());
    }
}
