//! Navigation: a fixed rail on wide screens, a slide-out drawer behind a
//! floating trigger on small ones.

use dioxus::prelude::*;

use crate::application::LibraryAction;
use crate::presentation::state::{use_library, use_ui_state};
use crate::routes::Route;

const RAIL_TOOLTIP: &str = "absolute left-14 bg-black border border-white/10 px-2 py-1 rounded text-[10px] font-bold uppercase tracking-widest text-white opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none whitespace-nowrap z-50";
const RAIL_BUTTON: &str = "group relative flex items-center justify-center h-12 w-12 rounded-xl bg-white/5 hover:bg-[#F5B800] hover:text-black transition-all border border-white/10 hover:border-[#F5B800] text-xl";
const DRAWER_ACTION: &str = "flex items-center gap-4 p-3 rounded-xl bg-white/5 hover:bg-[#F5B800] hover:text-black transition-all border border-white/10 group";

#[derive(Props, Clone, PartialEq)]
pub struct NavigationSidebarProps {
    pub on_forge: EventHandler<()>,
    pub on_inscribe: EventHandler<()>,
}

#[component]
pub fn NavigationSidebar(props: NavigationSidebarProps) -> Element {
    let mut store = use_library();
    let ui = use_ui_state();
    let route = use_route::<Route>();
    let mut drawer_open = use_signal(|| false);

    let on_discover = matches!(route, Route::DiscoverRoute {});
    let trigger_visibility = if *ui.chrome_visible.read() {
        "translate-y-0 opacity-100"
    } else {
        "-translate-y-20 opacity-0"
    };
    let backdrop = if drawer_open() {
        "opacity-100 pointer-events-auto"
    } else {
        "opacity-0 pointer-events-none"
    };
    let panel = if drawer_open() {
        "translate-x-0"
    } else {
        "-translate-x-full"
    };

    let mut go_home = move || {
        store.dispatch(LibraryAction::GoHome);
        navigator().push(Route::LibraryRoute {});
        drawer_open.set(false);
    };
    let mut go_discover = move || {
        navigator().push(Route::DiscoverRoute {});
        drawer_open.set(false);
    };

    rsx! {
        // Desktop rail
        aside {
            class: "hidden md:flex fixed top-0 left-0 h-screen w-20 bg-[#0f1115] border-r border-white/10 z-[110] flex-col items-center py-6",
            div {
                class: "mb-8",
                button {
                    class: "h-10 w-10 bg-gradient-to-tr from-[#F5B800] to-yellow-600 rounded-xl flex items-center justify-center shadow-[0_0_15px_rgba(245,184,0,0.4)] hover:scale-105 transition-transform",
                    title: "Home",
                    onclick: move |_| go_home(),
                    "🔥"
                }
            }
            div {
                class: "flex flex-col gap-4 w-full items-center",
                button {
                    class: RAIL_BUTTON,
                    title: "New Legend",
                    onclick: move |_| props.on_forge.call(()),
                    "+"
                    span { class: RAIL_TOOLTIP, "New Legend" }
                }
                button {
                    class: RAIL_BUTTON,
                    title: "Inscribe",
                    onclick: move |_| props.on_inscribe.call(()),
                    "✒"
                    span { class: RAIL_TOOLTIP, "Inscribe" }
                }
                button {
                    class: "{RAIL_BUTTON}",
                    class: if on_discover { "bg-[#F5B800] text-black" },
                    title: "Discover",
                    onclick: move |_| go_discover(),
                    "✦"
                    span { class: RAIL_TOOLTIP, "Discover" }
                }
            }
            div {
                class: "mt-auto flex flex-col gap-6 w-full items-center",
                ProfileBadge {}
            }
        }

        // Mobile trigger
        div {
            class: "md:hidden fixed top-4 left-4 z-50 transition-all duration-500 ease-in-out {trigger_visibility}",
            button {
                class: "h-10 w-10 flex items-center justify-center rounded-xl bg-black/40 backdrop-blur-md border border-white/10 text-white/70 hover:text-[#F5B800] transition-all shadow-lg active:scale-95",
                onclick: move |_| drawer_open.set(true),
                "🔥"
            }
        }

        // Mobile drawer
        div {
            class: "md:hidden fixed inset-0 z-[60] bg-black/80 backdrop-blur-sm transition-opacity duration-300 ease-in-out {backdrop}",
            onclick: move |_| drawer_open.set(false),
        }
        div {
            class: "md:hidden fixed top-0 bottom-0 left-0 w-[85%] max-w-sm bg-[#0f1115] border-r border-white/10 z-[70] flex flex-col p-6 shadow-2xl transition-transform duration-300 {panel}",
            div {
                class: "flex items-center justify-between mb-8",
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "h-8 w-8 bg-gradient-to-tr from-[#F5B800] to-yellow-600 rounded-lg flex items-center justify-center shadow-[0_0_10px_rgba(245,184,0,0.3)]",
                        "🔥"
                    }
                    span { class: "text-2xl font-black uppercase font-display tracking-tight", "Legends" }
                }
                button {
                    class: "p-2 bg-white/5 rounded-full text-gray-400 hover:text-white",
                    onclick: move |_| drawer_open.set(false),
                    "✕"
                }
            }
            nav {
                class: "flex flex-col gap-2 mb-8 border-b border-white/10 pb-8",
                DrawerNavItem {
                    label: "Library",
                    glyph: "▦",
                    active: !on_discover,
                    on_select: move |_| go_home(),
                }
                DrawerNavItem {
                    label: "Discover",
                    glyph: "✦",
                    active: on_discover,
                    on_select: move |_| go_discover(),
                }
            }
            div {
                class: "flex flex-col gap-3 mb-8",
                button {
                    class: DRAWER_ACTION,
                    onclick: move |_| {
                        drawer_open.set(false);
                        props.on_forge.call(());
                    },
                    div { class: "h-8 w-8 rounded-lg bg-black/20 flex items-center justify-center group-hover:bg-black/10", "+" }
                    span { class: "font-bold uppercase tracking-widest text-xs", "New Legend" }
                }
                button {
                    class: DRAWER_ACTION,
                    onclick: move |_| {
                        drawer_open.set(false);
                        props.on_inscribe.call(());
                    },
                    div { class: "h-8 w-8 rounded-lg bg-black/20 flex items-center justify-center group-hover:bg-black/10", "✒" }
                    span { class: "font-bold uppercase tracking-widest text-xs", "Inscribe" }
                }
            }
            div {
                class: "mt-auto pt-4 border-t border-white/10 flex items-center gap-3",
                ProfileBadge {}
                span { class: "text-xs font-bold text-gray-300 uppercase tracking-widest", "Player 1" }
            }
        }
    }
}

#[component]
fn DrawerNavItem(
    label: &'static str,
    glyph: &'static str,
    active: bool,
    on_select: EventHandler<()>,
) -> Element {
    let state = if active {
        "bg-white/10 text-white border-white/10"
    } else {
        "text-gray-400 border-transparent hover:bg-white/5"
    };

    rsx! {
        button {
            class: "flex items-center gap-4 p-4 rounded-xl transition-all border {state}",
            onclick: move |_| on_select.call(()),
            span { class: "text-2xl text-[#F5B800]", "{glyph}" }
            span { class: "text-xl font-display font-bold uppercase tracking-wide", "{label}" }
        }
    }
}

#[component]
fn ProfileBadge() -> Element {
    rsx! {
        div {
            class: "h-10 w-10 rounded-full bg-gradient-to-br from-gray-700 to-gray-800 flex items-center justify-center border border-white/10 relative",
            span { class: "text-[10px] font-bold text-gray-300", "YOU" }
            div { class: "absolute bottom-0 right-0 w-3 h-3 bg-green-500 border-2 border-[#09090b] rounded-full" }
        }
    }
}
