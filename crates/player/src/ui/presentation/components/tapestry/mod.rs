//! Tapestry: the full-screen detail view of one legend.
//!
//! Wide screens get a dossier layout with inline editing of the name,
//! epitaph and tags. Small screens get a cinematic hero over the portrait
//! with the visual feed and log entries below it.

mod moment_cards;

use dioxus::prelude::*;
use legends_domain::{Legend, LegendId, MomentKind};

pub use moment_cards::{VisualMomentCard, WrittenMomentCard};

use crate::application::tapestry::{share_payload, visible_tags, with_added_tag};
use crate::application::{LibraryAction, TapestryDraft};
use crate::presentation::state::{use_library, use_ui_state, LibraryStore, Overlay};
use crate::presentation::utils::dom;
use crate::presentation::utils::styles::object_position;
use crate::ui::use_platform;

const SCROLL_ID: &str = "tapestry-scroll";
const CAROUSEL_ID: &str = "tapestry-carousel";

/// Scroll offset after which the hero name has left the viewport.
const PAST_HERO_PX: f64 = 480.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InlineField {
    Name,
    Epitaph,
}

/// Write an inline draft back to the library when something changed.
fn commit_draft(mut store: LibraryStore, id: LegendId, draft: &TapestryDraft) {
    let Some(legend) = store.library.peek().legend(id).cloned() else {
        return;
    };
    match draft.commit(&legend) {
        Ok(Some(updated)) => {
            store.dispatch(LibraryAction::UpdateLegend(Box::new(updated)));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Inline edit rejected"),
    }
}

fn commit_tag(mut store: LibraryStore, id: LegendId, tag: &str) {
    let Some(legend) = store.library.peek().legend(id).cloned() else {
        return;
    };
    if let Some(updated) = with_added_tag(&legend, tag) {
        store.dispatch(LibraryAction::UpdateLegend(Box::new(updated)));
    }
}

#[component]
pub fn Tapestry(legend: Legend) -> Element {
    let mut store = use_library();
    let mut ui = use_ui_state();
    let platform = use_platform();

    let mut editing = use_signal(|| None::<InlineField>);
    let mut draft = use_signal(|| TapestryDraft::from_legend(&legend));
    let mut adding_tag = use_signal(|| false);
    let mut new_tag = use_signal(String::new);
    let mut show_all_tags = use_signal(|| false);
    let mut past_hero = use_signal(|| false);

    let id = legend.id();
    let name = legend.name().to_string();
    let initials: String = name.chars().take(2).collect();
    let color = legend.color().to_string();
    let image = legend.active_image().map(str::to_string);
    let position = object_position(legend.image_position());
    let visuals: Vec<_> = legend.visual_moments().into_iter().cloned().collect();
    let written: Vec<_> = legend.written_moments().into_iter().cloned().collect();
    let visual_count = visuals.len();
    let written_count = written.len();
    let (shown_tags, hidden_tags) = visible_tags(&legend, show_all_tags());
    let shown_tags = shown_tags.to_vec();
    let all_tags = legend.tags().to_vec();
    let tags_overflow = hidden_tags > 0 || show_all_tags();

    let mut start_edit = move |field: InlineField| {
        if let Some(current) = store.library.peek().legend(id) {
            draft.set(TapestryDraft::from_legend(current));
        }
        editing.set(Some(field));
    };
    let mut finish_edit = move || {
        editing.set(None);
        commit_draft(store, id, &draft.peek());
    };
    let mut finish_tag = move || {
        adding_tag.set(false);
        commit_tag(store, id, &new_tag.peek());
        new_tag.set(String::new());
    };
    let mut add_moment = move |kind: MomentKind| ui.open_foundry(Some(id), Some(kind));
    let mut view_moment = move |moment_id| {
        store.dispatch(LibraryAction::ViewMoment {
            legend_id: id,
            moment_id,
        });
    };

    rsx! {
        div {
            id: SCROLL_ID,
            class: "fixed inset-0 z-[100] bg-[#0f1115] overflow-y-auto scrollbar-hide md:custom-scrollbar md:pl-20",
            onscroll: move |_| async move {
                if let Some(y) = dom::scroll_top(SCROLL_ID).await {
                    past_hero.set(y > PAST_HERO_PX);
                    ui.on_scroll(y);
                }
            },

            // Desktop header
            header {
                class: "hidden md:flex w-full z-50 px-12 py-4 items-center justify-between sticky top-0 bg-[#0f1115]/80 backdrop-blur-md border-b border-white/5",
                button {
                    class: "group flex items-center gap-2 text-sm font-medium text-white/80 hover:text-white transition-colors relative z-10",
                    onclick: move |_| {
                        store.dispatch(LibraryAction::CloseLegend);
                    },
                    span { class: "text-xl group-hover:-translate-x-1 transition-transform", "‹" }
                    span { "Return to Library" }
                }
                div {
                    class: "absolute left-1/2 -translate-x-1/2 transition-all duration-500",
                    class: if past_hero() { "opacity-100 translate-y-0" } else { "opacity-0 -translate-y-4 pointer-events-none" },
                    span { class: "font-display font-bold uppercase text-xl text-white tracking-widest drop-shadow-lg", "{name}" }
                }
                div {
                    class: "flex items-center gap-3 relative z-10",
                    button {
                        class: "p-2.5 rounded-full border border-white/10 bg-black/40 hover:bg-black/60 text-white transition-all",
                        title: "Share",
                        onclick: move |_| {
                            let request = store.library.peek().legend(id).map(|l| share_payload(l, platform.current_url()));
                            if let Some(request) = request {
                                platform.share(request);
                            }
                        },
                        "⤴"
                    }
                    button {
                        class: "flex items-center gap-2 px-5 py-2.5 rounded-full border border-white/10 bg-black/40 hover:bg-black/60 text-white transition-all",
                        onclick: move |_| ui.open(Overlay::EditDrawer(id)),
                        span { class: "text-[#F5B800]", "✎" }
                        span { "Update Dossier" }
                    }
                }
            }

            // Mobile floating actions
            div {
                class: "md:hidden fixed top-0 left-0 right-0 z-50 p-4 flex justify-between items-start pointer-events-none",
                button {
                    class: "pointer-events-auto h-10 w-10 flex items-center justify-center rounded-full bg-black/40 backdrop-blur-md border border-white/10 text-white text-2xl shadow-lg active:scale-95 transition-transform",
                    onclick: move |_| {
                        store.dispatch(LibraryAction::CloseLegend);
                    },
                    "‹"
                }
                button {
                    class: "pointer-events-auto h-10 w-10 flex items-center justify-center rounded-full bg-black/40 backdrop-blur-md border border-white/10 text-[#F5B800] shadow-lg active:scale-95 transition-transform",
                    onclick: move |_| ui.open(Overlay::EditDrawer(id)),
                    "✎"
                }
            }

            // Mobile cinematic view
            div {
                class: "md:hidden relative w-full",
                div {
                    class: "fixed inset-0 z-0 pointer-events-none",
                    if let Some(src) = image.clone() {
                        img { src: "{src}", class: "w-full h-full object-cover", style: "{position}", alt: "{name}" }
                    } else {
                        div { class: "w-full h-full bg-gradient-to-br {color}" }
                    }
                    div { class: "absolute inset-0 bg-gradient-to-t from-[#0f1115] via-[#0f1115]/30 to-transparent opacity-95" }
                    div { class: "absolute bottom-0 left-0 right-0 h-96 bg-gradient-to-t from-[#0f1115] to-transparent" }
                }
                div {
                    class: "relative z-10 w-full",
                    div {
                        class: "min-h-[85vh] flex flex-col justify-end pb-12 px-6 items-center text-center",
                        GameBadge { game: legend.game().to_string() }
                        h1 {
                            class: "text-6xl font-display font-black uppercase text-white leading-[0.85] tracking-tight drop-shadow-2xl mb-5 break-words",
                            "{name}"
                        }
                        if legend.show_epitaph() && !legend.epitaph().is_empty() {
                            div {
                                class: "mb-8 max-w-[85%] mx-auto",
                                p { class: "text-white/90 font-serif italic text-lg leading-relaxed drop-shadow-lg", "\"{legend.epitaph()}\"" }
                            }
                        }
                        if legend.show_tags() {
                            div {
                                class: "flex flex-wrap gap-2 justify-center",
                                for tag in all_tags.iter() {
                                    span {
                                        key: "{tag}",
                                        class: "px-3 py-1.5 rounded-full bg-white/10 backdrop-blur-md border border-white/20 text-[10px] font-bold uppercase tracking-widest text-gray-200",
                                        "{tag}"
                                    }
                                }
                                if adding_tag() {
                                    input {
                                        class: "px-3 py-1.5 rounded-full bg-black/50 border border-[#F5B800] text-[10px] font-bold uppercase tracking-widest text-white w-24 focus:outline-none backdrop-blur-md",
                                        placeholder: "Tag...",
                                        autofocus: true,
                                        value: "{new_tag}",
                                        oninput: move |evt| new_tag.set(evt.value()),
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter {
                                                finish_tag();
                                            }
                                        },
                                        onblur: move |_| finish_tag(),
                                    }
                                } else {
                                    button {
                                        class: "h-8 w-8 rounded-full border border-dashed border-white/30 flex items-center justify-center text-white/70 hover:text-white hover:border-white/60 transition-colors backdrop-blur-md bg-white/5",
                                        onclick: move |_| adding_tag.set(true),
                                        "+"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "bg-[#0f1115] relative z-20 pb-32",
                        div {
                            class: "mb-12 pt-8",
                            div {
                                class: "px-6 flex items-center justify-between mb-4",
                                h3 { class: "text-xs font-bold uppercase tracking-widest text-gray-500", "Visual Feed" }
                                if visual_count > 0 {
                                    span { class: "text-[10px] font-bold text-gray-600", "{visual_count} Captured" }
                                }
                            }
                            div {
                                class: "w-full overflow-x-auto scrollbar-hide snap-x snap-mandatory flex gap-4 px-6 pb-4",
                                if visual_count == 0 {
                                    div {
                                        class: "min-w-[40%] snap-center flex items-center justify-center",
                                        button {
                                            class: "w-full aspect-video rounded-2xl border-2 border-dashed border-white/20 flex flex-col items-center justify-center text-gray-500 hover:text-[#F5B800] hover:bg-[#F5B800]/5 transition-all gap-2",
                                            onclick: move |_| add_moment(MomentKind::Image),
                                            div { class: "p-3 rounded-full bg-white/5", "+" }
                                            span { class: "text-[10px] font-bold uppercase tracking-widest", "Add Visual" }
                                        }
                                    }
                                }
                                for moment in visuals.iter() {
                                    VisualMomentCard {
                                        key: "{moment.id()}",
                                        wide: false,
                                        on_open: {
                                            let moment_id = moment.id();
                                            move |_| view_moment(moment_id)
                                        },
                                        moment: moment.clone(),
                                    }
                                }
                                if visual_count > 0 {
                                    div {
                                        class: "min-w-[20%] snap-center flex items-center justify-center",
                                        button {
                                            class: "h-12 w-12 rounded-full border border-dashed border-gray-700 flex items-center justify-center text-gray-500 hover:text-[#F5B800]",
                                            onclick: move |_| add_moment(MomentKind::Image),
                                            "+"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "px-6 space-y-6",
                            div {
                                class: "flex items-center justify-between border-b border-white/5 pb-2",
                                h3 { class: "text-xs font-bold uppercase tracking-widest text-gray-500", "Log Entries" }
                                span { class: "text-[10px] font-bold text-gray-600", "{written_count} Records" }
                            }
                            div {
                                class: "space-y-4",
                                if written_count == 0 {
                                    div {
                                        class: "py-10 text-center border border-dashed border-white/10 rounded-2xl",
                                        p { class: "text-gray-600 text-xs font-bold uppercase tracking-widest", "No inscriptions recorded" }
                                    }
                                }
                                for moment in written.iter() {
                                    WrittenMomentCard {
                                        key: "{moment.id()}",
                                        on_open: {
                                            let moment_id = moment.id();
                                            move |_| view_moment(moment_id)
                                        },
                                        moment: moment.clone(),
                                    }
                                }
                            }
                            div {
                                class: "pt-4",
                                button {
                                    class: "w-full py-4 rounded-xl bg-white/5 hover:bg-white/10 border border-white/10 text-gray-400 hover:text-white text-xs font-bold uppercase tracking-widest flex items-center justify-center gap-2 transition-colors",
                                    onclick: move |_| add_moment(MomentKind::Note),
                                    "+ Record New Entry"
                                }
                            }
                        }
                    }
                }
            }

            // Desktop dossier hero
            div {
                class: "hidden md:block pt-24 pb-8 max-w-7xl mx-auto px-12 relative z-10 bg-[#0f1115]",
                section {
                    class: "grid grid-cols-12 gap-16 items-center py-8",
                    div {
                        class: "col-span-6 relative group flex justify-center",
                        div { class: "absolute -inset-4 bg-gradient-to-br {color} blur-3xl rounded-full opacity-20 group-hover:opacity-40 transition-opacity duration-700" }
                        div {
                            class: "w-full aspect-[3/4] rounded-3xl overflow-hidden border border-white/10 shadow-2xl relative bg-[#1a1d23]",
                            if let Some(src) = image {
                                img {
                                    src: "{src}",
                                    class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-105",
                                    style: "{position}",
                                    alt: "{name}",
                                }
                            } else {
                                div {
                                    class: "w-full h-full bg-gradient-to-br {color} flex items-center justify-center",
                                    div { class: "text-white/20 font-display text-9xl uppercase font-black tracking-tighter opacity-50 mix-blend-overlay", "{initials}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "col-span-6 space-y-6",
                        GameBadge { game: legend.game().to_string() }
                        div {
                            class: "relative group/name",
                            if editing() == Some(InlineField::Name) {
                                input {
                                    class: "w-full bg-transparent text-7xl font-display font-black text-white mb-4 editable-field focus:outline-none focus:bg-white/5 rounded-lg -ml-2 px-2 py-1 transition-colors uppercase leading-[0.9] border border-transparent focus:border-white/20",
                                    autofocus: true,
                                    value: "{draft.read().name}",
                                    oninput: move |evt| draft.write().name = evt.value(),
                                    onblur: move |_| finish_edit(),
                                    onkeydown: move |evt| {
                                        if evt.key() == Key::Enter {
                                            finish_edit();
                                        }
                                    },
                                }
                            } else {
                                h1 {
                                    class: "text-7xl font-display font-black text-white mb-4 -ml-2 px-2 py-1 leading-[0.9] uppercase cursor-pointer relative",
                                    onclick: move |_| start_edit(InlineField::Name),
                                    "{name}"
                                    span { class: "absolute top-1/2 -right-8 -translate-y-1/2 opacity-0 group-hover/name:opacity-100 transition-opacity text-gray-500 text-xl", "✎" }
                                }
                            }
                        }
                        if legend.show_epitaph() {
                            div {
                                class: "relative pl-6 border-l-2 border-[#F5B800]/30",
                                if editing() == Some(InlineField::Epitaph) {
                                    textarea {
                                        class: "w-full bg-transparent text-2xl font-serif italic text-gray-300 leading-relaxed editable-field focus:outline-none focus:bg-white/5 rounded-lg p-2 transition-colors resize-none border border-transparent focus:border-white/20",
                                        rows: 5,
                                        autofocus: true,
                                        value: "{draft.read().epitaph}",
                                        oninput: move |evt| draft.write().epitaph = evt.value(),
                                        onblur: move |_| finish_edit(),
                                    }
                                } else {
                                    div {
                                        p {
                                            class: "text-2xl font-serif italic text-gray-300 leading-relaxed cursor-pointer line-clamp-3 hover:text-white transition-colors",
                                            onclick: move |_| start_edit(InlineField::Epitaph),
                                            "\"{legend.epitaph()}\""
                                        }
                                        button {
                                            class: "text-xs font-bold uppercase tracking-widest text-[#F5B800] mt-2 opacity-50 hover:opacity-100",
                                            onclick: move |_| start_edit(InlineField::Epitaph),
                                            "Read Full & Edit"
                                        }
                                    }
                                }
                            }
                        }
                        if legend.show_tags() {
                            div {
                                class: "flex flex-wrap gap-2 pt-4 items-center",
                                for tag in shown_tags.iter() {
                                    span {
                                        key: "{tag}",
                                        class: "px-3 py-1 rounded-full bg-white/5 border border-white/10 text-[10px] font-bold uppercase tracking-widest text-gray-400 hover:text-white hover:border-white/30 transition-all cursor-default",
                                        "{tag}"
                                    }
                                }
                                if tags_overflow {
                                    button {
                                        class: "text-[10px] font-bold uppercase tracking-widest text-gray-500 hover:text-white",
                                        onclick: move |_| show_all_tags.toggle(),
                                        if show_all_tags() { "Show Less" } else { "+{hidden_tags} More" }
                                    }
                                }
                                if adding_tag() {
                                    input {
                                        class: "px-3 py-1 rounded-full bg-white/10 border border-[#F5B800] text-[10px] font-bold uppercase tracking-widest text-white w-24 focus:outline-none",
                                        placeholder: "New Tag...",
                                        autofocus: true,
                                        value: "{new_tag}",
                                        oninput: move |evt| new_tag.set(evt.value()),
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter {
                                                finish_tag();
                                            }
                                        },
                                        onblur: move |_| finish_tag(),
                                    }
                                } else {
                                    button {
                                        class: "h-7 w-7 rounded-full border border-dashed border-white/20 flex items-center justify-center text-gray-500 hover:text-white hover:border-white/50 transition-colors",
                                        title: "Add Tag",
                                        onclick: move |_| adding_tag.set(true),
                                        "+"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Desktop content
            div {
                class: "hidden md:block relative z-10 bg-[#0f1115]",
                div {
                    class: "max-w-7xl mx-auto px-12",
                    section {
                        class: "py-20 border-t border-white/5",
                        div {
                            class: "flex items-end justify-between mb-8",
                            div {
                                h3 { class: "text-2xl font-display font-semibold text-white", "Field Surveillance" }
                                p { class: "text-gray-500 text-sm mt-1", "Operational screen captures from active deployments" }
                            }
                            div {
                                class: "flex gap-3",
                                button {
                                    class: "p-3 rounded-full border border-white/10 hover:bg-white/5 transition-colors text-white",
                                    onclick: move |_| dom::scroll_carousel(CAROUSEL_ID, -1.0),
                                    "‹"
                                }
                                button {
                                    class: "p-3 rounded-full border border-white/10 hover:bg-white/5 transition-colors text-white",
                                    onclick: move |_| dom::scroll_carousel(CAROUSEL_ID, 1.0),
                                    "›"
                                }
                            }
                        }
                        div {
                            id: CAROUSEL_ID,
                            class: "flex gap-6 overflow-x-auto scrollbar-hide snap-x snap-mandatory pb-4",
                            if visual_count == 0 {
                                div {
                                    class: "min-w-[60%] snap-center",
                                    div {
                                        class: "aspect-video glass-card overflow-hidden rounded-2xl flex items-center justify-center bg-[#1a1d23] border border-white/5",
                                        div {
                                            class: "text-center px-10 opacity-30",
                                            div { class: "text-6xl mb-4", "🖼" }
                                            p { class: "uppercase tracking-widest text-xs font-bold", "Surveillance Data Unavailable" }
                                        }
                                    }
                                }
                            }
                            for moment in visuals.iter() {
                                VisualMomentCard {
                                    key: "{moment.id()}",
                                    wide: true,
                                    on_open: {
                                        let moment_id = moment.id();
                                        move |_| view_moment(moment_id)
                                    },
                                    moment: moment.clone(),
                                }
                            }
                            div {
                                class: "min-w-[200px] snap-center flex items-center justify-center",
                                button {
                                    class: "flex flex-col items-center gap-4 text-gray-600 hover:text-[#F5B800] transition-colors group",
                                    onclick: move |_| add_moment(MomentKind::Image),
                                    div { class: "h-16 w-16 rounded-full border border-dashed border-gray-700 flex items-center justify-center text-2xl group-hover:border-[#F5B800] group-hover:bg-[#F5B800]/10 transition-all", "+" }
                                    span { class: "text-xs font-bold uppercase tracking-widest", "Add Visual" }
                                }
                            }
                        }
                    }

                    section {
                        class: "grid grid-cols-12 gap-12 py-10 border-t border-white/5",
                        div {
                            class: "col-span-4 space-y-6",
                            div {
                                class: "sticky top-24",
                                h3 { class: "text-2xl font-display font-semibold text-white mb-4", "Strategic Notes" }
                                p { class: "text-gray-400 leading-relaxed text-sm", "Refine tactical approaches, track evolution, and document specific build configurations for high-stakes missions." }
                                div {
                                    class: "mt-8 p-6 glass-card border border-[#F5B800]/20 bg-[#F5B800]/5 rounded-2xl",
                                    p { class: "text-[10px] uppercase tracking-widest text-[#F5B800] font-bold mb-3", "Operational Status" }
                                    div {
                                        class: "flex items-center gap-3",
                                        div { class: "w-2 h-2 rounded-full bg-[#F5B800] animate-pulse shadow-[0_0_10px_#F5B800]" }
                                        span { class: "text-sm font-medium text-white", "{written_count} entries on record" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "col-span-8 space-y-6 pb-20",
                            for moment in written.iter() {
                                WrittenMomentCard {
                                    key: "{moment.id()}",
                                    on_open: {
                                        let moment_id = moment.id();
                                        move |_| view_moment(moment_id)
                                    },
                                    moment: moment.clone(),
                                }
                            }
                            button {
                                class: "w-full py-12 rounded-3xl border-2 border-dashed border-white/5 hover:border-[#F5B800]/40 hover:bg-[#F5B800]/[0.02] transition-all flex flex-col items-center justify-center group",
                                onclick: move |_| add_moment(MomentKind::Note),
                                div { class: "w-12 h-12 rounded-full bg-white/5 flex items-center justify-center mb-4 text-2xl text-gray-400 group-hover:text-[#F5B800] group-hover:scale-110 transition-transform", "+" }
                                span { class: "text-sm font-bold uppercase tracking-widest text-gray-500 group-hover:text-white transition-colors", "Record New Tactical Note" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GameBadge(game: String) -> Element {
    rsx! {
        div {
            class: "mb-6 md:mb-0",
            div {
                class: "inline-flex items-center gap-2 px-3 py-1.5 text-[10px] font-bold tracking-[0.2em] uppercase text-[#F5B800] bg-black/50 backdrop-blur-md border border-[#F5B800]/20 rounded-full shadow-lg",
                span { "🎮" }
                "{game}"
            }
        }
    }
}
