//! Context-aware floating action button for the mobile shell.
//!
//! With a legend open it inscribes straight away. On the library it opens
//! a quick-actions sheet offering Forge and Inscribe.

use dioxus::prelude::*;

use crate::presentation::state::use_ui_state;

const FAB_BUTTON: &str = "flex h-10 w-10 items-center justify-center rounded-full shadow-[0_10px_30px_rgba(0,0,0,0.5)] transition-all active:scale-95 bg-[#F5B800] text-black border border-white/10";
const SHEET_ACTION: &str = "flex items-center gap-4 p-4 rounded-xl bg-white/5 hover:bg-white/10 border border-white/5 active:scale-[0.98] transition-all";

#[derive(Props, Clone, PartialEq)]
pub struct SmartFabProps {
    pub legend_selected: bool,
    pub on_inscribe: EventHandler<()>,
    pub on_forge: EventHandler<()>,
}

#[component]
pub fn SmartFab(props: SmartFabProps) -> Element {
    let ui = use_ui_state();
    let mut sheet_open = use_signal(|| false);

    let visibility = if *ui.chrome_visible.read() {
        "translate-y-0 opacity-100"
    } else {
        "-translate-y-32 opacity-0"
    };
    let on_inscribe = props.on_inscribe;
    let on_forge = props.on_forge;

    if props.legend_selected {
        return rsx! {
            div {
                class: "md:hidden fixed top-4 right-4 z-[120] transition-all duration-500 ease-in-out {visibility}",
                button {
                    class: "{FAB_BUTTON} hover:scale-110",
                    title: "Inscribe Moment",
                    onclick: move |_| on_inscribe.call(()),
                    "✒"
                }
            }
        };
    }

    rsx! {
        div {
            class: "md:hidden fixed top-4 right-4 z-50 transition-all duration-500 ease-in-out {visibility}",
            button {
                class: "{FAB_BUTTON} text-2xl",
                title: "Actions",
                onclick: move |_| sheet_open.set(true),
                "+"
            }
        }

        if sheet_open() {
            div {
                class: "fixed inset-0 z-[100] flex items-end md:hidden",
                div {
                    class: "absolute inset-0 bg-black/60 backdrop-blur-sm",
                    onclick: move |_| sheet_open.set(false),
                }
                div {
                    class: "w-full bg-[#18181b] rounded-t-2xl p-6 relative z-10 animate-slide-up border-t border-white/10 pb-10",
                    div { class: "w-12 h-1 bg-white/20 rounded-full mx-auto mb-6" }
                    h3 { class: "text-xs font-bold uppercase tracking-widest text-gray-500 mb-4", "Quick Actions" }
                    div {
                        class: "flex flex-col gap-3",
                        button {
                            class: SHEET_ACTION,
                            onclick: move |_| {
                                sheet_open.set(false);
                                on_forge.call(());
                            },
                            div { class: "h-10 w-10 rounded-full bg-[#F5B800] text-black flex items-center justify-center text-xl", "+" }
                            div {
                                class: "text-left",
                                h4 { class: "font-bold text-white uppercase tracking-wider", "Forge Legend" }
                                p { class: "text-[10px] text-gray-400", "Create a new character profile" }
                            }
                        }
                        button {
                            class: SHEET_ACTION,
                            onclick: move |_| {
                                sheet_open.set(false);
                                on_inscribe.call(());
                            },
                            div { class: "h-10 w-10 rounded-full bg-white/10 text-white border border-white/20 flex items-center justify-center", "✒" }
                            div {
                                class: "text-left",
                                h4 { class: "font-bold text-white uppercase tracking-wider", "Inscribe Moment" }
                                p { class: "text-[10px] text-gray-400", "Log a note, image, or stat" }
                            }
                        }
                    }
                    button {
                        class: "w-full mt-6 py-4 text-center text-xs font-bold uppercase tracking-widest text-gray-500",
                        onclick: move |_| sheet_open.set(false),
                        "Cancel"
                    }
                }
            }
        }
    }
}
