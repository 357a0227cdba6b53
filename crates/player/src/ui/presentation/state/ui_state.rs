//! Transient UI state: which overlay is open and whether the floating
//! chrome is showing.

use dioxus::prelude::*;
use legends_domain::{LegendId, MomentKind};

use crate::application::timing::chrome_visible_after_scroll;

/// The modal currently layered over the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    /// The legend creation wizard
    Forge,
    /// The moment logging modal
    Foundry {
        target: Option<LegendId>,
        kind: Option<MomentKind>,
    },
    /// The full-record editor for a legend
    EditDrawer(LegendId),
}

#[derive(Clone, Copy)]
pub struct UiState {
    pub overlay: Signal<Overlay>,
    /// Floating chrome (mobile menu trigger, smart FAB) visibility
    pub chrome_visible: Signal<bool>,
    last_scroll_y: Signal<f64>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            overlay: Signal::new(Overlay::None),
            chrome_visible: Signal::new(true),
            last_scroll_y: Signal::new(0.0),
        }
    }

    pub fn open(&mut self, overlay: Overlay) {
        tracing::debug!(?overlay, "Opening overlay");
        self.overlay.set(overlay);
    }

    pub fn close(&mut self) {
        self.overlay.set(Overlay::None);
    }

    pub fn open_forge(&mut self) {
        self.open(Overlay::Forge);
    }

    pub fn open_foundry(&mut self, target: Option<LegendId>, kind: Option<MomentKind>) {
        self.open(Overlay::Foundry { target, kind });
    }

    /// Track a scroll position and show or hide the chrome.
    pub fn on_scroll(&mut self, y: f64) {
        let previous = *self.last_scroll_y.peek();
        if let Some(visible) = chrome_visible_after_scroll(previous, y) {
            if *self.chrome_visible.peek() != visible {
                self.chrome_visible.set(visible);
            }
            self.last_scroll_y.set(y);
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
