//! Legends domain: the data model of a gaming legends journal.
//!
//! Legends are character profiles tied to a game. Each owns a journal of
//! Moments. Games form a small catalog. Manual display order and the tag
//! catalog are value objects kept apart from the entities they describe.

extern crate self as legends_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Game, Legend, Moment, MomentContent, MomentKind, MomentPatch, DEFAULT_LEGEND_COLOR,
};

pub use error::DomainError;

pub use ids::{GameId, LegendId, MomentId};

pub use value_objects::{
    game_gradient, game_theme_color, DisplayOrder, FocalPoint, LegendName, RenderedBounds, Size,
    TagCatalog, DEFAULT_ACCENT, DEFAULT_TAGS, UNORDERED,
};
