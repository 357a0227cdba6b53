//! Sticky control deck above the library: game filter, reorder mode and
//! layout switches.

use dioxus::prelude::*;

use crate::application::{Layout, LibraryAction, LibraryView};
use crate::presentation::state::{use_library, use_ui_state};

const ACTIVE_PILL: &str = "bg-white/20 text-white shadow-inner";
const IDLE_PILL: &str = "text-gray-500 hover:text-white";

#[component]
pub fn ControlDeck() -> Element {
    let mut store = use_library();
    let ui = use_ui_state();

    let (view, layout, reorder_mode, active_game) = {
        let library = store.library.read();
        (
            library.view(),
            library.layout(),
            library.reorder_mode(),
            library.active_game().map(|g| g.name.clone()),
        )
    };
    let games_view = view == LibraryView::Games;
    let grid = layout == Layout::Grid;
    let other_view = if games_view {
        LibraryView::Legends
    } else {
        LibraryView::Games
    };
    let other_layout = if grid { Layout::List } else { Layout::Grid };

    // List layouts are centred; the game grid matches its own padding.
    let alignment = match (grid, games_view) {
        (false, _) => "max-w-4xl mx-auto",
        (true, true) => "md:px-12",
        (true, false) => "",
    };
    let visibility = if *ui.chrome_visible.read() {
        "translate-y-0 opacity-100 pointer-events-auto"
    } else {
        "-translate-y-20 opacity-0 pointer-events-none md:translate-y-0 md:opacity-100 md:pointer-events-auto"
    };
    let filter_button = match (games_view, reorder_mode) {
        (_, true) => "bg-transparent text-gray-300 opacity-30 cursor-not-allowed",
        (true, false) => "bg-[#F5B800] text-black shadow-[0_0_15px_rgba(245,184,0,0.5)]",
        (false, false) => "bg-transparent text-gray-300 hover:text-white hover:bg-white/5",
    };

    rsx! {
        div {
            class: "sticky top-16 md:top-6 z-30 mb-8 px-4 md:px-0 transition-all duration-500 ease-in-out {visibility}",
            div {
                class: "w-full flex items-center justify-between gap-3 md:gap-4 relative transition-all duration-300 {alignment}",

                // Mobile pill: filter and layout only
                div {
                    class: "md:hidden flex w-full justify-center pointer-events-none relative z-20",
                    div {
                        class: "pointer-events-auto bg-[#18181b] border border-white/10 rounded-full p-1.5 px-3 flex items-center shadow-2xl gap-3",
                        if let Some(name) = active_game.clone() {
                            button {
                                class: "flex items-center gap-2 px-3 py-1.5 rounded-full bg-[#F5B800]/20 text-[#F5B800] text-[10px] font-bold uppercase tracking-widest hover:bg-[#F5B800]/30 transition-all",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::FilterByGame(None));
                                },
                                "{name} ✕"
                            }
                        } else {
                            button {
                                class: "text-gray-400 hover:text-white transition-colors p-1 text-lg",
                                title: "Filter by game",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::SetView(other_view));
                                },
                                "⧩"
                            }
                        }
                        div { class: "w-px h-5 bg-white/10" }
                        button {
                            class: "p-1 text-gray-400 hover:text-white transition-colors text-lg",
                            title: "Toggle layout",
                            onclick: move |_| {
                                store.dispatch(LibraryAction::SetLayout(other_layout));
                            },
                            if grid { "☰" } else { "▦" }
                        }
                    }
                }

                // Desktop controls
                div {
                    class: "hidden md:flex w-full items-center justify-between gap-4",
                    div {
                        class: "bg-black/60 backdrop-blur-xl border border-white/10 rounded-full p-1.5 shadow-xl flex items-center gap-2",
                        if let Some(name) = active_game {
                            button {
                                class: "group flex items-center gap-2 px-4 py-2 rounded-full bg-[#F5B800]/10 border border-[#F5B800]/30 text-[#F5B800] text-xs font-bold uppercase tracking-widest hover:bg-[#F5B800]/20 transition-all",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::FilterByGame(None));
                                },
                                "{name}"
                                span { class: "opacity-50 group-hover:opacity-100", "✕" }
                            }
                        } else {
                            button {
                                class: "flex items-center justify-center gap-3 px-6 h-10 rounded-full transition-all duration-300 {filter_button}",
                                disabled: reorder_mode,
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::SetView(other_view));
                                },
                                span { "⧩" }
                                span { class: "text-xs font-bold uppercase tracking-widest", "Filter" }
                            }
                        }
                    }
                    div {
                        class: "flex items-center gap-3",
                        if reorder_mode {
                            button {
                                class: "h-12 px-8 bg-[#F5B800] text-black rounded-full shadow-xl flex items-center justify-center gap-2 font-bold uppercase tracking-widest text-xs",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::SetReorderMode(false));
                                },
                                "✓ Done"
                            }
                        } else {
                            button {
                                class: "h-12 w-12 flex items-center justify-center rounded-full border shadow-xl transition-all backdrop-blur-xl bg-black/60 text-gray-400 border-white/10 hover:text-white",
                                title: "Reorder Mode",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::SetReorderMode(true));
                                },
                                "✥"
                            }
                        }
                        div {
                            class: "bg-black/60 backdrop-blur-xl border border-white/10 rounded-full p-1.5 shadow-xl flex items-center",
                            button {
                                class: "h-10 w-10 flex items-center justify-center rounded-full transition-all",
                                class: if grid { "{IDLE_PILL}" } else { "{ACTIVE_PILL}" },
                                title: "List",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::SetLayout(Layout::List));
                                },
                                "☰"
                            }
                            button {
                                class: "h-10 w-10 flex items-center justify-center rounded-full transition-all",
                                class: if grid { "{ACTIVE_PILL}" } else { "{IDLE_PILL}" },
                                title: "Grid",
                                onclick: move |_| {
                                    store.dispatch(LibraryAction::SetLayout(Layout::Grid));
                                },
                                "▦"
                            }
                        }
                    }
                }
            }
        }
    }
}
