//! Library store
//!
//! Wraps the session's [`LibraryState`] in a signal so every component
//! reads the same collections and dispatches intents through one place.

use dioxus::prelude::*;

use crate::application::{ActionOutcome, LibraryAction, LibraryState};

#[derive(Clone, Copy)]
pub struct LibraryStore {
    pub library: Signal<LibraryState>,
}

impl LibraryStore {
    /// The starter session: seed legends and catalog.
    pub fn seeded() -> Self {
        Self {
            library: Signal::new(LibraryState::seeded()),
        }
    }

    /// Apply `action` to the library.
    pub fn dispatch(&mut self, action: LibraryAction) -> ActionOutcome {
        let label = action_label(&action);
        let outcome = self.library.write().reduce(action);
        tracing::debug!(action = label, ?outcome, "Library action");
        outcome
    }
}

fn action_label(action: &LibraryAction) -> &'static str {
    match action {
        LibraryAction::CreateLegend(_) => "create_legend",
        LibraryAction::AddMoment { .. } => "add_moment",
        LibraryAction::UpdateMoment { .. } => "update_moment",
        LibraryAction::DeleteMoment(_) => "delete_moment",
        LibraryAction::UpdateLegend(_) => "update_legend",
        LibraryAction::DeleteLegend(_) => "delete_legend",
        LibraryAction::DeleteTag(_) => "delete_tag",
        LibraryAction::AddGame(_) => "add_game",
        LibraryAction::FilterByGame(_) => "filter_by_game",
        LibraryAction::GoHome => "go_home",
        LibraryAction::OpenLegend(_) => "open_legend",
        LibraryAction::CloseLegend => "close_legend",
        LibraryAction::ViewMoment { .. } => "view_moment",
        LibraryAction::CloseMoment => "close_moment",
        LibraryAction::SetView(_) => "set_view",
        LibraryAction::SetLayout(_) => "set_layout",
        LibraryAction::SetReorderMode(_) => "set_reorder_mode",
        LibraryAction::BeginDrag(_) => "begin_drag",
        LibraryAction::DragOver(_) => "drag_over",
        LibraryAction::EndDrag => "end_drag",
    }
}
