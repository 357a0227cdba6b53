//! Presentation utilities
//!
//! Small helpers shared by components: DOM queries that Dioxus events do
//! not expose, CSS class and style builders.

pub mod dom;
pub mod styles;
