//! Game Search Service - realm lookup backed by the game search port
//!
//! Remote lookups only run for queries longer than two characters. Shorter
//! queries are answered from the local catalog by the caller. Every
//! failure is logged and turned into an empty result.

use std::sync::Arc;

use legends_domain::common::contains_ignore_case;
use legends_domain::Game;

use crate::ports::outbound::GameSearchPort;

/// Queries need at least this many characters to reach the port.
pub const MIN_REMOTE_QUERY_CHARS: usize = 3;

#[derive(Clone)]
pub struct GameSearchService {
    port: Arc<dyn GameSearchPort>,
}

impl GameSearchService {
    pub fn new(port: Arc<dyn GameSearchPort>) -> Self {
        Self { port }
    }

    /// Whether `query` is long enough for a remote lookup.
    pub fn is_searchable(query: &str) -> bool {
        query.trim().chars().count() >= MIN_REMOTE_QUERY_CHARS
    }

    /// Search the external catalog. Never fails: errors yield an empty list.
    pub async fn search(&self, query: &str) -> Vec<Game> {
        let query = query.trim();
        if !Self::is_searchable(query) {
            return Vec::new();
        }

        match self.port.search(query).await {
            Ok(games) => {
                tracing::debug!(query, count = games.len(), "Game search completed");
                games
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Game search failed");
                Vec::new()
            }
        }
    }
}

/// Local catalog entries whose name contains `query`, ignoring case.
pub fn local_matches<'a>(catalog: &'a [Game], query: &str) -> Vec<&'a Game> {
    catalog
        .iter()
        .filter(|g| contains_ignore_case(&g.name, query.trim()))
        .collect()
}
