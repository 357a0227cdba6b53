//! Infrastructure adapters: platform services, game catalog search and
//! local file handling.

pub mod file_reader;
pub mod game_search;
pub mod platform;

pub use game_search::{create_game_search, IgdbConfig};
