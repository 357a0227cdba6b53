//! Legends Player crate.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use runner::config::ShellKind;
pub use state::Platform;
pub use ui::{app, use_platform, Route};
