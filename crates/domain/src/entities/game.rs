//! Game entity - a catalog entry ("realm") legends are tied to

use serde::{Deserialize, Serialize};

use crate::common::slugify;
use crate::value_objects::game_gradient;
use crate::GameId;

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// Theme token (gradient class) used when there is no cover art
    pub cover: String,
    /// Cover art URL
    pub image: Option<String>,
    /// Reference in the external game catalog
    pub external_id: Option<u64>,
}

impl Game {
    pub fn new(id: impl Into<GameId>, name: impl Into<String>, cover: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cover: cover.into(),
            image: None,
            external_id: None,
        }
    }

    /// A realm named by the user while creating a legend.
    ///
    /// The id is a slug of the trimmed name and the cover is derived from it.
    pub fn from_realm_name(name: &str) -> Self {
        let name = name.trim();
        let slug = slugify(name);
        let id = if slug.is_empty() {
            GameId::new(name)
        } else {
            GameId::new(slug)
        };
        Self::new(id, name, game_gradient(name))
    }

    /// A new realm whose id does not clash with any game in `catalog`.
    ///
    /// Different names can share a slug with a seeded id (`WoW` and
    /// `wow`), so the slug gets a numeric suffix until it is free.
    pub fn new_realm_in(name: &str, catalog: &[Game]) -> Self {
        let mut game = Self::from_realm_name(name);
        let base = game.id.as_str().to_string();
        let mut suffix = 2;
        while catalog.iter().any(|g| g.id == game.id) {
            game.id = GameId::new(format!("{base}-{suffix}"));
            suffix += 1;
        }
        game
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_external_id(mut self, external_id: u64) -> Self {
        self.external_id = Some(external_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realm_from_name_gets_slug_and_gradient() {
        let game = Game::from_realm_name("  Hollow Knight ");
        assert_eq!(game.id.as_str(), "hollow-knight");
        assert_eq!(game.name, "Hollow Knight");
        assert_eq!(game.cover, game_gradient("Hollow Knight"));
        assert_eq!(game.image, None);
    }

    #[test]
    fn new_realm_id_skips_taken_slugs() {
        let catalog = vec![
            Game::new("wow", "World of Warcraft", "bg-blue-800"),
            Game::new("wow-2", "WoW Classic", "bg-blue-900"),
        ];

        let game = Game::new_realm_in("WoW", &catalog);

        assert_eq!(game.id.as_str(), "wow-3");
        assert_eq!(game.name, "WoW");
    }

    #[test]
    fn new_realm_keeps_free_slug() {
        let game = Game::new_realm_in("Hades", &[]);
        assert_eq!(game.id.as_str(), "hades");
    }

    #[test]
    fn builders() {
        let game = Game::new("igdb-1942", "The Witcher 3: Wild Hunt", "bg-black")
            .with_image("https://images.example/co1wyy.jpg")
            .with_external_id(1942);
        assert_eq!(game.external_id, Some(1942));
        assert!(game.image.is_some());
    }
}
