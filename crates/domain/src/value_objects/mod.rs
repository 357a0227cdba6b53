//! Value objects: validated names, ordering, tags, focal points and theming.

pub mod display_order;
pub mod focal_point;
pub mod names;
pub mod tag_catalog;
pub mod theme;

pub use display_order::{DisplayOrder, UNORDERED};
pub use focal_point::{FocalPoint, RenderedBounds, Size};
pub use names::LegendName;
pub use tag_catalog::{TagCatalog, DEFAULT_TAGS};
pub use theme::{game_gradient, game_theme_color, DEFAULT_ACCENT};
