use dioxus::prelude::*;

/// Vertical grip glyph marking a draggable item.
#[component]
pub fn GripHandle(#[props(default)] class: String) -> Element {
    rsx! {
        span { class: "select-none leading-none {class}", "⋮⋮" }
    }
}
