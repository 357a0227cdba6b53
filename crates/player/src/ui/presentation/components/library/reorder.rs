//! Drag and touch reordering for library items.
//!
//! Mouse drags use the native drag events. Touch drags hit-test the element
//! under the finger through its display index attribute. On touch screens a
//! long press on a grid card enters reorder mode and picks the card up.

use dioxus::prelude::*;

use crate::application::timing::LONG_PRESS_MS;
use crate::application::{Debouncer, LibraryAction};
use crate::presentation::components::common::GripHandle;
use crate::presentation::state::{use_library, LibraryStore};
use crate::presentation::utils::dom;
use crate::ui::use_platform;

/// Move the dragged item to whichever item is under the finger.
fn follow_touch(mut store: LibraryStore, evt: &TouchEvent) {
    if !store.library.peek().reorder_session().is_active() {
        return;
    }
    let Some(point) = evt.touches().first().map(|touch| touch.client_coordinates()) else {
        return;
    };
    spawn(async move {
        if let Some(target) = dom::reorder_index_at(point.x, point.y).await {
            store.dispatch(LibraryAction::DragOver(target));
        }
    });
}

#[derive(Props, Clone, PartialEq)]
pub struct ReorderItemProps {
    /// Position in the displayed list
    pub index: usize,
    #[props(default)]
    pub class: String,
    /// Touches anywhere on the item drag it (grid cards). List rows drag
    /// through their [`ReorderGrip`] instead.
    #[props(default = true)]
    pub touch_drag: bool,
    pub on_open: EventHandler<()>,
    pub children: Element,
}

/// A draggable library item. Clicks open it unless reorder mode is on.
#[component]
pub fn ReorderItem(props: ReorderItemProps) -> Element {
    let mut store = use_library();
    let platform = use_platform();
    let mut long_press = use_signal(Debouncer::new);

    let index = props.index;
    let touch_drag = props.touch_drag;
    let on_open = props.on_open;
    let (reorder_mode, dragged) = {
        let library = store.library.read();
        (
            library.reorder_mode(),
            library.reorder_session().dragged_index() == Some(index),
        )
    };
    let fade = if dragged { "opacity-50 scale-95" } else { "opacity-100" };

    rsx! {
        div {
            "data-reorder-index": "{index}",
            draggable: reorder_mode,
            class: "transition-all duration-300 {fade} {props.class}",
            onclick: move |_| {
                if !reorder_mode {
                    on_open.call(());
                }
            },
            ondragstart: move |_| {
                store.dispatch(LibraryAction::BeginDrag(index));
            },
            ondragover: move |evt| {
                evt.prevent_default();
                store.dispatch(LibraryAction::DragOver(index));
            },
            ondragend: move |_| {
                store.dispatch(LibraryAction::EndDrag);
            },
            ontouchstart: move |_| {
                if !touch_drag {
                    return;
                }
                if reorder_mode {
                    store.dispatch(LibraryAction::BeginDrag(index));
                    return;
                }
                let ticket = long_press.write().schedule();
                let platform = platform.clone();
                spawn(async move {
                    platform.sleep_ms(LONG_PRESS_MS).await;
                    if long_press.peek().is_current(ticket) {
                        tracing::debug!(index, "Long press entered reorder mode");
                        store.dispatch(LibraryAction::SetReorderMode(true));
                        store.dispatch(LibraryAction::BeginDrag(index));
                    }
                });
            },
            ontouchmove: move |evt| {
                long_press.write().cancel();
                follow_touch(store, &evt);
            },
            ontouchend: move |_| {
                long_press.write().cancel();
                if store.library.peek().reorder_session().is_active() {
                    store.dispatch(LibraryAction::EndDrag);
                }
            },
            {props.children}
        }
    }
}

/// Drag handle for list rows. Always shown on small screens, and on every
/// screen while reorder mode is on.
#[component]
pub fn ReorderGrip(index: usize) -> Element {
    let mut store = use_library();
    let display = if store.library.read().reorder_mode() {
        "flex"
    } else {
        "flex md:hidden"
    };

    rsx! {
        div {
            class: "text-gray-500 pl-2 cursor-grab active:cursor-grabbing touch-none p-4 -mr-2 hover:text-[#F5B800] {display}",
            onclick: |evt| evt.stop_propagation(),
            ontouchstart: move |evt| {
                evt.stop_propagation();
                store.dispatch(LibraryAction::BeginDrag(index));
            },
            ontouchmove: move |evt| {
                evt.stop_propagation();
                follow_touch(store, &evt);
            },
            ontouchend: move |evt| {
                evt.stop_propagation();
                store.dispatch(LibraryAction::EndDrag);
            },
            GripHandle { class: "text-xl" }
        }
    }
}
