//! Built-in game search over a fixed sample list.
//!
//! Used whenever no catalog credentials are configured. An empty query
//! returns every sample; otherwise names are matched by case-insensitive
//! substring.

use async_trait::async_trait;
use legends_domain::common::contains_ignore_case;
use legends_domain::{Game, GameId};

use crate::ports::outbound::{GameSearchError, GameSearchPort};

const COVER_ART: &str = "https://images.igdb.com/igdb/image/upload/t_cover_big/";

/// Sample titles: (external id, name, gradient, cover art file). Catalog
/// ids are positional (`igdb-1` ..), unlike remote results.
const SAMPLES: [(u64, &str, &str, &str); 5] = [
    (
        1942,
        "The Witcher 3: Wild Hunt",
        "from-red-900 to-black",
        "co1wyy.jpg",
    ),
    (119171, "Elden Ring", "from-yellow-700 to-black", "co4h8h.jpg"),
    (1020, "Cyberpunk 2077", "from-yellow-400 to-black", "co2mjt.jpg"),
    (
        138237,
        "God of War Ragnarök",
        "from-blue-900 to-black",
        "co5s5v.jpg",
    ),
    (121129, "Baldur's Gate 3", "from-red-800 to-black", "co670h.jpg"),
];

#[derive(Clone, Debug)]
pub struct StubGameSearch {
    games: Vec<Game>,
}

impl Default for StubGameSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl StubGameSearch {
    pub fn new() -> Self {
        let games = SAMPLES
            .iter()
            .zip(1u64..)
            .map(|(&(external_id, name, gradient, art), position)| {
                Game::new(
                    GameId::new(format!("igdb-{position}")),
                    name,
                    format!("bg-gradient-to-br {gradient}"),
                )
                .with_image(format!("{COVER_ART}{art}"))
                .with_external_id(external_id)
            })
            .collect();
        Self { games }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }
}

#[async_trait]
impl GameSearchPort for StubGameSearch {
    async fn search(&self, query: &str) -> Result<Vec<Game>, GameSearchError> {
        tracing::debug!(query, "Game search using sample data");
        if query.is_empty() {
            return Ok(self.games.clone());
        }
        Ok(self
            .games
            .iter()
            .filter(|g| contains_ignore_case(&g.name, query))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_query_returns_all_samples() {
        let games = StubGameSearch::new().search("").await.unwrap();

        assert_eq!(games.len(), 5);
    }

    #[tokio::test]
    async fn matches_substring_ignoring_case() {
        let games = StubGameSearch::new().search("GATE").await.unwrap();

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "Baldur's Gate 3");
        assert_eq!(games[0].external_id, Some(121129));
        assert_eq!(games[0].id.as_str(), "igdb-5");
    }

    #[tokio::test]
    async fn unknown_titles_return_nothing() {
        let games = StubGameSearch::new().search("Hollow Knight").await.unwrap();

        assert!(games.is_empty());
    }

    #[test]
    fn sample_ids_follow_list_position() {
        let search = StubGameSearch::new();
        let ids: Vec<&str> = search
            .games()
            .iter()
            .map(|g| g.id.as_str())
            .collect();

        assert_eq!(ids, ["igdb-1", "igdb-2", "igdb-3", "igdb-4", "igdb-5"]);
    }

    #[test]
    fn samples_carry_cover_art() {
        let stub = StubGameSearch::new();

        assert!(stub
            .games()
            .iter()
            .all(|g| g.image.as_deref().is_some_and(|i| i.starts_with(COVER_ART))));
    }
}
