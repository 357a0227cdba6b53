//! Entities: the records a journal is made of.

pub mod game;
pub mod legend;
pub mod moment;

pub use game::Game;
pub use legend::{Legend, DEFAULT_LEGEND_COLOR};
pub use moment::{Moment, MomentContent, MomentKind, MomentPatch};
