//! Presentation state held in Dioxus signals.

use dioxus::prelude::*;

mod library_store;
mod ui_state;

pub use library_store::LibraryStore;
pub use ui_state::{Overlay, UiState};

/// Hook to access the library store from context
pub fn use_library() -> LibraryStore {
    use_context::<LibraryStore>()
}

/// Hook to access the transient UI state from context
pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}
