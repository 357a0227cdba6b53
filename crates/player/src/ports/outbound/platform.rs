//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The `Platform` struct (DI container) that aggregates these traits lives
//! in `state/platform.rs`. This module holds only trait definitions.

use std::{future::Future, pin::Pin};

use chrono::NaiveDate;

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Today's date in the user's local time zone
    fn today(&self) -> NaiveDate;
}

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (debounces, feedback timers).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// System clipboard. Writes are fire-and-forget.
pub trait ClipboardProvider: Clone + 'static {
    fn copy_text(&self, text: &str);
}

/// Content handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

/// Platform share sheet. Best effort: failures are logged, never returned.
pub trait ShareProvider: Clone + 'static {
    /// Whether a native share sheet exists on this platform
    fn can_share(&self) -> bool;

    fn share(&self, request: ShareRequest);
}

/// Browser document operations (page title, location)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// The page URL, where there is one
    fn current_url(&self) -> Option<String>;
}
