//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod game_search_port;
pub mod platform;

pub use game_search_port::{GameSearchError, GameSearchPort};
pub use platform::{
    ClipboardProvider, DocumentProvider, ShareProvider, ShareRequest, SleepProvider, TimeProvider,
};

#[cfg(any(test, feature = "testing"))]
pub use game_search_port::MockGameSearchPort;
