//! Common utility functions shared across the domain and the player.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod datetime;
pub mod string;

pub use datetime::{format_moment_date, parse_moment_date};
pub use string::{contains_ignore_case, eq_ignore_case, slugify, trimmed_non_empty};
