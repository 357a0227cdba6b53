//! Application services
//!
//! Services implement use cases that talk to the outside world. They
//! depend on port traits, not concrete infrastructure implementations.

pub mod game_search_service;

pub use game_search_service::{local_matches, GameSearchService, MIN_REMOTE_QUERY_CHARS};
