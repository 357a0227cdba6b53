use dioxus::prelude::*;

/// A labelled on/off switch.
#[component]
pub fn ToggleRow(label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    let track = if checked { "bg-[#F5B800]" } else { "bg-gray-700" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };

    rsx! {
        button {
            class: "w-full flex items-center justify-between p-4 rounded-xl bg-white/5 border border-white/5 hover:bg-white/10 transition-colors",
            onclick: move |_| on_toggle.call(!checked),
            span { class: "text-sm font-medium text-gray-200", "{label}" }
            div {
                class: "w-11 h-6 rounded-full p-0.5 transition-colors {track}",
                div { class: "w-5 h-5 rounded-full bg-white shadow transition-transform {knob}" }
            }
        }
    }
}
