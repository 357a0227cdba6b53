//! Presentation layer - Dioxus UI components and views

pub mod components;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use services::Services;
