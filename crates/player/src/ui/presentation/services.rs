//! Service providers for the presentation layer
//!
//! Components reach application services through context rather than
//! depending on infrastructure adapter types.

use dioxus::prelude::*;

use crate::application::GameSearchService;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub game_search: GameSearchService,
}

impl Services {
    pub fn new(game_search: GameSearchService) -> Self {
        Self { game_search }
    }
}

/// Hook to access the GameSearchService from context
pub fn use_game_search_service() -> GameSearchService {
    let services = use_context::<Services>();
    services.game_search.clone()
}
