//! Legend collection in masonry grid and list layouts.

use dioxus::prelude::*;
use legends_domain::Legend;

use super::{ReorderGrip, ReorderItem};
use crate::application::LibraryAction;
use crate::presentation::components::common::GripHandle;
use crate::presentation::state::use_library;
use crate::presentation::utils::styles::{card_aspect, object_position};

const REORDER_CARD: &str = "hover:scale-[1.02] cursor-grab active:cursor-grabbing ring-2 ring-white/10 border-2 border-dashed border-white/20 touch-none";
const REORDER_ROW: &str = "cursor-grab active:cursor-grabbing border-dashed border-white/20 touch-none";

#[component]
pub fn LegendGrid() -> Element {
    let store = use_library();
    let legends: Vec<Legend> = store
        .library
        .read()
        .displayed_legends()
        .into_iter()
        .cloned()
        .collect();
    let is_empty = legends.is_empty();

    rsx! {
        div {
            class: "columns-1 md:columns-2 lg:columns-3 gap-6 space-y-6 px-2 md:px-0 animate-in fade-in duration-700",
            for (index, legend) in legends.iter().enumerate() {
                LegendGridCard { key: "{legend.id()}", index, legend: legend.clone() }
            }
        }
        if is_empty {
            EmptyLibrary {}
        }
    }
}

#[component]
fn LegendGridCard(index: usize, legend: Legend) -> Element {
    let mut store = use_library();
    let reorder_mode = store.library.read().reorder_mode();
    let id = legend.id();
    let mode = if reorder_mode {
        REORDER_CARD
    } else {
        "hover:scale-[1.02] hover:shadow-[0_0_50px_rgba(245,184,0,0.25)]"
    };

    rsx! {
        ReorderItem {
            index,
            class: format!(
                "break-inside-avoid mb-6 group relative w-full min-h-[250px] cursor-pointer overflow-hidden rounded-2xl bg-[#18181b] shadow-2xl shadow-black/60 {} {mode}",
                card_aspect(index)
            ),
            on_open: move |_| {
                store.dispatch(LibraryAction::OpenLegend(id));
            },
            if reorder_mode {
                div {
                    class: "absolute top-4 right-4 z-50 bg-black/60 backdrop-blur rounded-full p-2 text-white border border-white/20 shadow-lg pointer-events-none",
                    GripHandle {}
                }
            }
            if let Some(visage) = legend.visage() {
                img {
                    src: "{visage}",
                    class: "absolute inset-0 w-full h-full object-cover",
                    style: object_position(legend.image_position()),
                    alt: "Visage",
                }
            } else {
                div { class: "absolute inset-0 bg-gradient-to-br {legend.color()}" }
            }
            div { class: "absolute inset-0 bg-black/20 group-hover:opacity-0 transition-opacity duration-300" }
            div { class: "absolute inset-0 card-gradient-overlay pointer-events-none" }
            div {
                class: "absolute inset-0 p-8 flex flex-col justify-end overflow-hidden",
                div {
                    class: "z-20 transition-all duration-500 transform translate-y-2 group-hover:translate-y-0",
                    h3 {
                        class: "text-3xl md:text-4xl font-display font-bold uppercase tracking-tight text-white drop-shadow-lg leading-[0.9] mb-1",
                        "{legend.name()}"
                    }
                    div {
                        class: "text-[10px] font-bold uppercase tracking-[0.2em] text-[#F5B800] drop-shadow-md",
                        "{legend.game()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn LegendList() -> Element {
    let store = use_library();
    let legends: Vec<Legend> = store
        .library
        .read()
        .displayed_legends()
        .into_iter()
        .cloned()
        .collect();
    let is_empty = legends.is_empty();

    rsx! {
        div {
            class: "flex flex-col gap-4 max-w-4xl mx-auto pb-20 animate-in fade-in duration-700",
            for (index, legend) in legends.iter().enumerate() {
                LegendRow { key: "{legend.id()}", index, legend: legend.clone() }
            }
        }
        if is_empty {
            EmptyLibrary {}
        }
    }
}

#[component]
fn LegendRow(index: usize, legend: Legend) -> Element {
    let mut store = use_library();
    let reorder_mode = store.library.read().reorder_mode();
    let id = legend.id();
    let mode = if reorder_mode { REORDER_ROW } else { "" };
    let moment_count = legend.moments().len();

    rsx! {
        ReorderItem {
            index,
            touch_drag: false,
            class: format!(
                "group relative flex items-center gap-6 rounded-2xl border border-white/10 bg-[#18181b] p-4 shadow-lg shadow-black/40 hover:border-[#F5B800]/50 hover:shadow-[0_10px_30px_rgba(0,0,0,0.3)] cursor-pointer {mode}"
            ),
            on_open: move |_| {
                store.dispatch(LibraryAction::OpenLegend(id));
            },
            div {
                class: "h-24 w-24 shrink-0 overflow-hidden rounded-xl border border-white/10 {legend.color()}",
                if let Some(visage) = legend.visage() {
                    img {
                        src: "{visage}",
                        class: "h-full w-full object-cover",
                        style: object_position(legend.image_position()),
                        alt: "Visage",
                    }
                }
            }
            div {
                class: "flex-grow min-w-0",
                h3 {
                    class: "text-3xl font-display font-bold uppercase tracking-tight text-white leading-none mb-1",
                    "{legend.name()}"
                }
                div {
                    class: "text-[10px] font-bold uppercase tracking-[0.2em] text-[#F5B800] mb-1 flex items-center gap-2",
                    span { class: "w-4 h-0.5 bg-[#F5B800]/50 rounded-full" }
                    "{legend.game()}"
                }
                if legend.show_epitaph() && !legend.epitaph().is_empty() {
                    p {
                        class: "hidden md:block text-sm text-gray-500 font-serif italic truncate mt-1 max-w-md",
                        "\"{legend.epitaph()}\""
                    }
                }
            }
            div {
                class: "flex items-center gap-4 pr-4",
                div {
                    class: "hidden md:block text-right",
                    span { class: "block text-xl font-bold text-white", "{moment_count}" }
                    span { class: "text-[10px] text-gray-600 uppercase tracking-widest", "Moments" }
                }
                if !reorder_mode {
                    span {
                        class: "hidden md:block text-2xl text-gray-600 group-hover:text-white transition-colors",
                        "›"
                    }
                }
            }
            ReorderGrip { index }
        }
    }
}

#[component]
fn EmptyLibrary() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-20 opacity-50",
            span { class: "text-5xl mb-4 text-gray-600", "✒" }
            p { class: "text-xl font-display uppercase tracking-widest text-gray-500", "No Legends Found" }
        }
    }
}
