//! Platform-specific implementations
//!
//! Implementations of the provider traits in `ports/outbound/platform.rs`.
//! The correct platform is selected at compile time based on the target
//! architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmClipboardProvider, WasmDocumentProvider, WasmShareProvider,
    WasmSleepProvider, WasmTimeProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopClipboardProvider, DesktopDocumentProvider, DesktopShareProvider,
    DesktopSleepProvider, DesktopTimeProvider,
};
