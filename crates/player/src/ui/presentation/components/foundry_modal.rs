//! Foundry overlay: log a new moment against a legend.

use dioxus::prelude::*;
use legends_domain::{Legend, LegendId, MomentKind};

use crate::application::timing::FILE_PICKER_DELAY_MS;
use crate::application::{FoundryEffect, FoundryModal, FoundryStep, LibraryAction};
use crate::presentation::components::common::ImageInput;
use crate::presentation::state::{use_library, use_ui_state};
use crate::presentation::utils::dom;
use crate::ui::use_platform;

const VISUAL_INPUT_ID: &str = "foundry-visual";

/// Types offered below the two primary choices.
const SECONDARY_KINDS: [(MomentKind, &str, &str); 3] = [
    (MomentKind::Link, "🔗", "Link"),
    (MomentKind::Quote, "❝", "Quote"),
    (MomentKind::Stat, "⛨", "Build"),
];

fn placeholder(kind: MomentKind) -> &'static str {
    match kind {
        MomentKind::Link => "https://...",
        MomentKind::Quote => "Words worth remembering...",
        MomentKind::Stat => "Paste the build readout...",
        _ => "Chronicle your journey...",
    }
}

#[component]
pub fn FoundryOverlay(target: Option<LegendId>, kind: Option<MomentKind>) -> Element {
    let mut store = use_library();
    let mut ui = use_ui_state();
    let platform = use_platform();

    let mut modal = use_hook(|| {
        let (modal, effect) = FoundryModal::open(store.library.peek().legends(), target, kind);
        if effect == FoundryEffect::OpenFilePicker {
            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(FILE_PICKER_DELAY_MS).await;
                dom::click_element(VISUAL_INPUT_ID);
            });
        }
        Signal::new(modal)
    });

    let state = modal.read().clone();
    let legends: Vec<Legend> = store.library.read().legends().to_vec();
    let active = state
        .target()
        .and_then(|id| legends.iter().find(|l| l.id() == id))
        .cloned();
    let selected_index = state
        .target()
        .and_then(|id| legends.iter().position(|l| l.id() == id))
        .unwrap_or_default();
    let is_visual = state.kind().is_visual();
    let title = if is_visual { "Add Visual" } else { "Inscribe Note" };

    let mut choose = move |kind: MomentKind| {
        if modal.write().select_type(kind) == FoundryEffect::OpenFilePicker {
            dom::click_element(VISUAL_INPUT_ID);
        }
    };

    rsx! {
        div {
            class: "fixed inset-0 z-[200] flex items-end md:items-center justify-center p-0 md:p-4 bg-black/80 backdrop-blur-md",
            div { class: "absolute inset-0", onclick: move |_| ui.close() }

            div {
                class: "w-full h-[90vh] md:h-auto md:max-h-[90vh] md:max-w-lg bg-[#0a0a0a] border-t md:border border-[#F5B800]/30 rounded-t-2xl md:rounded-2xl shadow-[0_0_50px_rgba(245,184,0,0.1)] overflow-hidden flex flex-col animate-slide-up md:animate-none z-10",

                div {
                    class: "p-6 border-b border-white/10 flex justify-between items-center bg-black/50 shrink-0",
                    div {
                        class: "flex items-center gap-3",
                        if state.step() == FoundryStep::Editor {
                            button {
                                class: "text-gray-500 hover:text-white text-xl",
                                onclick: move |_| modal.write().back(),
                                "‹"
                            }
                        }
                        span { class: "text-[#F5B800] text-xl", "✒" }
                        h2 { class: "text-xl font-bold uppercase tracking-widest text-white font-display", "{title}" }
                    }
                    button { class: "text-gray-500 hover:text-white", onclick: move |_| ui.close(), "✕" }
                }

                ImageInput {
                    id: VISUAL_INPUT_ID.to_string(),
                    on_pick: move |data_url: String| modal.write().set_content(data_url),
                }

                match state.step() {
                    FoundryStep::TypeSelect => rsx! {
                        div {
                            class: "flex flex-col gap-4 overflow-y-auto custom-scrollbar flex-grow",
                            div {
                                class: "px-6 pt-6 pb-2",
                                label { class: "text-[10px] font-bold uppercase tracking-widest text-gray-500 mb-3 block", "Inscribing For" }
                                if legends.is_empty() {
                                    p { class: "text-sm text-gray-500", "Forge a legend first." }
                                } else {
                                    div {
                                        class: "relative group",
                                        div {
                                            class: "flex items-center gap-4 p-3 rounded-xl border border-white/10 bg-white/5 group-hover:border-[#F5B800]/50 transition-all cursor-pointer",
                                            if let Some(legend) = active.as_ref() {
                                                div {
                                                    class: "h-12 w-12 rounded-lg shrink-0 overflow-hidden border border-white/10 relative {legend.color()}",
                                                    if let Some(src) = legend.visage() {
                                                        img { src: "{src}", class: "w-full h-full object-cover", alt: "Visage" }
                                                    } else {
                                                        div { class: "w-full h-full bg-gradient-to-br from-gray-700 to-gray-900" }
                                                    }
                                                }
                                                div {
                                                    class: "flex-grow",
                                                    h3 { class: "text-white font-bold uppercase tracking-widest group-hover:text-[#F5B800] transition-colors font-display text-lg", "{legend.name()}" }
                                                    p { class: "text-[10px] text-gray-500", "{legend.game()}" }
                                                }
                                            }
                                            span { class: "text-gray-500 group-hover:text-white transition-colors", "▾" }
                                        }
                                        select {
                                            class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                                            value: "{selected_index}",
                                            onchange: {
                                                let ids: Vec<LegendId> = legends.iter().map(Legend::id).collect();
                                                move |evt: FormEvent| {
                                                    let picked = evt.value().parse::<usize>().ok().and_then(|i| ids.get(i).copied());
                                                    if let Some(id) = picked {
                                                        modal.write().set_target(id);
                                                    }
                                                }
                                            },
                                            for (index, legend) in legends.iter().enumerate() {
                                                option { key: "{legend.id()}", value: "{index}", "{legend.name()}" }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                class: "p-6 pt-2 flex flex-col gap-4",
                                div {
                                    class: "grid grid-cols-2 gap-4 mt-2",
                                    TypeTile {
                                        glyph: "📷",
                                        label: "Visual",
                                        hint: "Capture a moment",
                                        on_pick: move |_| choose(MomentKind::Image),
                                    }
                                    TypeTile {
                                        glyph: "✒",
                                        label: "Journal",
                                        hint: "Write a log",
                                        on_pick: move |_| choose(MomentKind::Note),
                                    }
                                }
                                div {
                                    class: "grid grid-cols-3 gap-3",
                                    for (kind, glyph, label) in SECONDARY_KINDS {
                                        button {
                                            key: "{kind}",
                                            class: "flex items-center justify-center gap-2 p-3 rounded-xl border border-white/10 bg-white/5 hover:bg-white/10 hover:border-[#F5B800] transition-all text-[10px] font-bold uppercase tracking-widest text-gray-300",
                                            onclick: move |_| choose(kind),
                                            span { class: "text-[#F5B800]", "{glyph}" }
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    FoundryStep::Editor => rsx! {
                        div {
                            class: "p-6 flex-grow flex flex-col space-y-6",
                            div {
                                class: "space-y-4 flex-grow flex flex-col",
                                if state.kind() != MomentKind::Stat {
                                    input {
                                        class: "w-full bg-transparent border-b border-white/20 p-2 text-white font-bold uppercase tracking-widest focus:border-[#F5B800] focus:outline-none placeholder:text-gray-600 font-display text-xl",
                                        placeholder: "Title",
                                        value: "{state.caption()}",
                                        oninput: move |evt| modal.write().set_caption(evt.value()),
                                    }
                                }
                                if is_visual {
                                    div {
                                        class: "w-full h-48 bg-white/5 border-2 border-dashed border-white/20 rounded-xl flex flex-col items-center justify-center text-gray-500 hover:border-[#F5B800] hover:text-[#F5B800] transition-colors cursor-pointer overflow-hidden relative",
                                        onclick: move |_| dom::click_element(VISUAL_INPUT_ID),
                                        if state.content().is_empty() {
                                            span { class: "text-3xl", "📷" }
                                            span { class: "text-xs font-bold uppercase tracking-widest mt-2", "Upload Visual" }
                                        } else {
                                            img { src: "{state.content()}", class: "w-full h-full object-cover", alt: "Upload" }
                                        }
                                    }
                                } else {
                                    textarea {
                                        class: "w-full flex-grow min-h-[12rem] bg-white/5 border border-white/10 rounded-xl p-4 text-white font-serif focus:border-[#F5B800] focus:outline-none resize-none placeholder:text-gray-600",
                                        placeholder: placeholder(state.kind()),
                                        value: "{state.content()}",
                                        oninput: move |evt| modal.write().set_content(evt.value()),
                                    }
                                }
                            }
                            div {
                                class: "pt-4",
                                button {
                                    class: "w-full py-4 rounded-xl bg-[#F5B800] text-black font-bold uppercase tracking-widest hover:bg-[#ffc94d] transition-colors flex items-center justify-center gap-2 disabled:opacity-30 disabled:cursor-not-allowed",
                                    disabled: !state.can_submit(),
                                    onclick: move |_| {
                                        let submitted = modal.peek().submit(platform.today());
                                        match submitted {
                                            Ok((legend_id, moment)) => {
                                                store.dispatch(LibraryAction::AddMoment { legend_id, moment });
                                                ui.close();
                                            }
                                            Err(e) => tracing::warn!(error = %e, "Moment not inscribed"),
                                        }
                                    },
                                    "✓ Inscribe"
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn TypeTile(
    glyph: &'static str,
    label: &'static str,
    hint: &'static str,
    on_pick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "flex flex-col items-center justify-center p-6 rounded-xl border border-white/10 bg-white/5 hover:bg-white/10 hover:border-[#F5B800] transition-all group gap-3 text-center",
            onclick: move |_| on_pick.call(()),
            div { class: "p-4 rounded-full bg-black/50 text-[#F5B800] text-2xl group-hover:scale-110 transition-transform", "{glyph}" }
            div {
                h3 { class: "text-sm font-bold uppercase tracking-widest text-white", "{label}" }
                p { class: "text-[10px] text-gray-500 mt-1", "{hint}" }
            }
        }
    }
}
