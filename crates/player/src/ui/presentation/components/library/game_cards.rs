//! Game catalog in grid and list layouts. Picking a game filters the
//! legends to it.

use dioxus::prelude::*;
use legends_domain::Game;

use super::{ReorderGrip, ReorderItem};
use crate::application::LibraryAction;
use crate::presentation::components::common::GripHandle;
use crate::presentation::state::use_library;

#[component]
pub fn GameGrid() -> Element {
    let store = use_library();
    let games: Vec<Game> = store
        .library
        .read()
        .displayed_games()
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 md:gap-8 px-2 md:px-12 animate-in zoom-in-95 duration-500",
            for (index, game) in games.iter().enumerate() {
                GameGridCard { key: "{game.id}", index, game: game.clone() }
            }
        }
    }
}

#[component]
fn GameGridCard(index: usize, game: Game) -> Element {
    let mut store = use_library();
    let reorder_mode = store.library.read().reorder_mode();
    let id = game.id.clone();
    let mode = if reorder_mode {
        "hover:scale-[1.02] cursor-grab active:cursor-grabbing ring-2 ring-white/10 border-2 border-dashed border-white/20 touch-none"
    } else {
        "hover:-translate-y-2 hover:shadow-[0_10px_40px_rgba(0,0,0,0.5)] ring-1 ring-white/5 hover:ring-[#F5B800]/50"
    };

    rsx! {
        ReorderItem {
            index,
            on_open: move |_| {
                store.dispatch(LibraryAction::FilterByGame(Some(id.clone())));
            },
            div {
                class: "group relative aspect-[3/4] w-full overflow-hidden rounded-2xl bg-[#18181b] shadow-2xl transition-all duration-300 text-left cursor-pointer {mode}",
                if reorder_mode {
                    div {
                        class: "absolute top-4 right-4 z-50 bg-black/60 backdrop-blur rounded-full p-2 text-white border border-white/20 shadow-lg pointer-events-none",
                        GripHandle {}
                    }
                }
                match &game.image {
                    Some(image) => rsx! {
                        img {
                            src: "{image}",
                            class: "absolute inset-0 w-full h-full object-cover transition-all duration-500 opacity-60 grayscale group-hover:grayscale-0 group-hover:opacity-100",
                            alt: "{game.name}",
                        }
                    },
                    None => rsx! {
                        div { class: "absolute inset-0 {game.cover} opacity-60 group-hover:opacity-80 transition-all duration-700" }
                    },
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent opacity-90 group-hover:opacity-60 transition-opacity pointer-events-none" }
                div {
                    class: "absolute bottom-0 left-0 right-0 p-8 text-center transform translate-y-2 group-hover:translate-y-0 transition-transform pointer-events-none",
                    span {
                        class: "text-2xl font-display font-bold uppercase tracking-wide text-white drop-shadow-lg leading-tight block",
                        "{game.name}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn GameList() -> Element {
    let store = use_library();
    let games: Vec<Game> = store
        .library
        .read()
        .displayed_games()
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-3 pb-20 max-w-4xl mx-auto animate-in fade-in duration-500",
            for (index, game) in games.iter().enumerate() {
                GameRow { key: "{game.id}", index, game: game.clone() }
            }
        }
    }
}

#[component]
fn GameRow(index: usize, game: Game) -> Element {
    let mut store = use_library();
    let reorder_mode = store.library.read().reorder_mode();
    let legend_count = store.library.read().legend_count_for(&game.name);
    let id = game.id.clone();
    let mode = if reorder_mode {
        "cursor-grab active:cursor-grabbing border-dashed border-white/20 touch-none"
    } else {
        "cursor-pointer"
    };

    rsx! {
        ReorderItem {
            index,
            touch_drag: false,
            class: format!(
                "group flex items-center gap-6 rounded-2xl border border-white/10 bg-[#18181b] p-4 shadow-lg shadow-black/40 hover:border-[#F5B800]/50 hover:shadow-[0_10px_30px_rgba(0,0,0,0.3)] relative {mode}"
            ),
            on_open: move |_| {
                store.dispatch(LibraryAction::FilterByGame(Some(id.clone())));
            },
            div {
                class: "h-20 w-16 shrink-0 rounded-xl overflow-hidden shadow-lg relative",
                match &game.image {
                    Some(image) => rsx! {
                        img { src: "{image}", class: "w-full h-full object-cover", alt: "{game.name}" }
                    },
                    None => rsx! {
                        div { class: "w-full h-full {game.cover}" }
                    },
                }
            }
            div {
                class: "flex-grow",
                h3 {
                    class: "text-lg md:text-2xl font-display font-bold uppercase tracking-wide text-white",
                    "{game.name}"
                }
                p {
                    class: "text-[10px] text-gray-500 uppercase tracking-widest mt-1",
                    "{legend_count} Legends"
                }
            }
            if !reorder_mode {
                div {
                    class: "flex items-center gap-4 border-l border-white/10 pl-4",
                    span {
                        class: "p-2 text-2xl text-gray-500 group-hover:text-[#F5B800] rounded-full transition-all",
                        "›"
                    }
                }
            }
            ReorderGrip { index }
        }
    }
}
