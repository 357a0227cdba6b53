//! Library page building blocks: the control deck, legend and game
//! collections in grid or list layout, and the reorder plumbing they share.

mod control_deck;
mod game_cards;
mod legend_cards;
mod reorder;

pub use control_deck::ControlDeck;
pub use game_cards::{GameGrid, GameList};
pub use legend_cards::{LegendGrid, LegendList};
pub use reorder::{ReorderGrip, ReorderItem};
