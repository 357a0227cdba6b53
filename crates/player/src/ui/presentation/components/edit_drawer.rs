//! Full-record editor for a legend.

use dioxus::prelude::*;
use legends_domain::Legend;

use crate::application::{DrawerTab, EditDrawerDraft, LibraryAction};
use crate::presentation::components::common::{ImageInput, ToggleRow};
use crate::presentation::state::{use_library, use_ui_state};
use crate::presentation::utils::dom;

const VISAGE_INPUT_ID: &str = "edit-drawer-visage";

#[component]
pub fn EditDrawer(legend: Legend) -> Element {
    let mut store = use_library();
    let mut ui = use_ui_state();

    let mut draft = use_signal(|| EditDrawerDraft::from_legend(&legend));
    let mut confirm_delete = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let id = legend.id();
    let color = legend.color().to_string();
    let selectable = EditDrawerDraft::selectable_tags(store.library.read().tags());

    let current = draft.read().clone();
    let available: Vec<String> = selectable
        .into_iter()
        .filter(|tag| !current.has_tag(tag))
        .collect();

    let save = move |_| {
        let original = store.library.peek().legend(id).cloned();
        let Some(original) = original else {
            ui.close();
            return;
        };
        match draft.peek().save(&original) {
            Ok(updated) => {
                store.dispatch(LibraryAction::UpdateLegend(Box::new(updated)));
                ui.close();
            }
            Err(e) => {
                tracing::warn!(legend = %id, error = %e, "Dossier not saved");
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "fixed inset-0 z-[150] flex items-center justify-center p-0 md:p-6",
            div {
                class: "absolute inset-0 bg-black/80 backdrop-blur-sm transition-opacity",
                onclick: move |_| ui.close(),
            }

            div {
                class: "bg-[#111] w-full h-full md:h-auto md:max-w-5xl md:aspect-[16/9] md:rounded-3xl border border-white/10 shadow-2xl relative z-10 flex flex-col md:flex-row overflow-hidden animate-slide-up",

                // Visual editor
                div {
                    class: "w-full md:w-[45%] h-[40vh] md:h-full relative group bg-black",
                    div {
                        class: "absolute inset-0 cursor-pointer",
                        onclick: move |_| dom::click_element(VISAGE_INPUT_ID),
                        if let Some(src) = current.visage.clone() {
                            img { src: "{src}", class: "w-full h-full object-cover transition-opacity duration-300 group-hover:opacity-70", alt: "Visage" }
                        } else {
                            div { class: "w-full h-full bg-gradient-to-br {color} group-hover:opacity-80 transition-opacity" }
                        }
                        div {
                            class: "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity z-20 pointer-events-none",
                            div {
                                class: "bg-black/60 backdrop-blur-md px-4 py-2 rounded-full border border-white/20 flex items-center gap-2",
                                span { class: "text-white", "🖼" }
                                span { class: "text-xs font-bold uppercase tracking-widest text-white", "Change Visage" }
                            }
                        }
                        div { class: "absolute inset-0 bg-gradient-to-t from-black via-black/20 to-transparent pointer-events-none" }
                    }
                    div {
                        class: "absolute bottom-0 left-0 right-0 p-8 z-30 pointer-events-none",
                        label { class: "text-[10px] font-bold uppercase tracking-widest text-[#F5B800] mb-2 block drop-shadow-md", "Legend Name" }
                        input {
                            class: "w-full bg-transparent border-none p-0 text-5xl md:text-6xl font-black text-white focus:outline-none placeholder:text-white/20 font-display uppercase tracking-tight drop-shadow-xl pointer-events-auto",
                            placeholder: "NAME",
                            value: "{current.name}",
                            oninput: move |evt| {
                                error.set(None);
                                draft.write().name = evt.value();
                            },
                        }
                    }
                    ImageInput {
                        id: VISAGE_INPUT_ID.to_string(),
                        on_pick: move |data_url: String| draft.write().visage = Some(data_url),
                    }
                }

                // Attributes editor
                div {
                    class: "flex-1 flex flex-col h-full bg-[#111] relative",
                    div {
                        class: "flex items-center justify-between p-6 border-b border-white/5",
                        div {
                            class: "flex gap-6",
                            TabButton {
                                label: "Identity",
                                active: current.tab == DrawerTab::Identity,
                                on_select: move |_| draft.write().tab = DrawerTab::Identity,
                            }
                            TabButton {
                                label: "Lore & Config",
                                active: current.tab == DrawerTab::Lore,
                                on_select: move |_| draft.write().tab = DrawerTab::Lore,
                            }
                        }
                        button {
                            class: "p-2 rounded-full text-gray-500 hover:text-white hover:bg-white/5 transition-colors",
                            onclick: move |_| ui.close(),
                            "✕"
                        }
                    }

                    div {
                        class: "flex-1 overflow-y-auto custom-scrollbar p-8",
                        match current.tab {
                            DrawerTab::Identity => rsx! {
                                div {
                                    class: "space-y-8",
                                    div {
                                        class: "space-y-2",
                                        FieldLabel { glyph: "✦", text: "Origin Game" }
                                        input {
                                            class: "w-full bg-transparent border-b border-white/20 py-2 text-xl font-bold text-white focus:border-[#F5B800] focus:outline-none placeholder:text-gray-700 transition-colors",
                                            placeholder: "e.g. Elden Ring",
                                            value: "{current.game}",
                                            oninput: move |evt| draft.write().game = evt.value(),
                                        }
                                    }
                                    div {
                                        class: "space-y-4",
                                        div {
                                            class: "flex justify-between items-center",
                                            FieldLabel { glyph: "☗", text: "Class Tags" }
                                            button {
                                                class: if current.managing_tags { "text-[10px] uppercase font-bold tracking-widest text-red-400" } else { "text-[10px] uppercase font-bold tracking-widest text-gray-600 hover:text-white" },
                                                onclick: move |_| {
                                                    let mut d = draft.write();
                                                    d.managing_tags = !d.managing_tags;
                                                },
                                                if current.managing_tags { "Done" } else { "Edit List" }
                                            }
                                        }
                                        div {
                                            class: "flex flex-wrap gap-2 min-h-[40px]",
                                            for tag in current.tags.iter() {
                                                button {
                                                    key: "{tag}",
                                                    class: "px-3 py-1.5 rounded-md bg-[#F5B800] text-black text-xs font-bold uppercase tracking-wider hover:bg-white transition-colors flex items-center gap-2 group",
                                                    onclick: {
                                                        let tag = tag.clone();
                                                        move |_| draft.write().toggle_tag(&tag)
                                                    },
                                                    "{tag}"
                                                    span { class: "opacity-50 group-hover:opacity-100", "✕" }
                                                }
                                            }
                                            input {
                                                class: "px-3 py-1.5 rounded-md bg-transparent border border-dashed border-white/20 text-white text-xs font-bold uppercase tracking-wider focus:border-[#F5B800] focus:outline-none w-24 placeholder:text-gray-600",
                                                placeholder: "+ Custom",
                                                value: "{current.new_tag}",
                                                oninput: move |evt| draft.write().new_tag = evt.value(),
                                                onkeydown: move |evt| {
                                                    if evt.key() == Key::Enter {
                                                        evt.prevent_default();
                                                        draft.write().add_custom_tag();
                                                    }
                                                },
                                            }
                                        }
                                        div {
                                            class: "pt-6 border-t border-white/5",
                                            p { class: "text-[10px] font-bold uppercase tracking-widest text-gray-600 mb-3", "Available Runes" }
                                            div {
                                                class: "flex flex-wrap gap-2",
                                                for tag in available.iter() {
                                                    button {
                                                        key: "{tag}",
                                                        class: if current.managing_tags { "px-3 py-1.5 rounded-md border text-xs font-bold uppercase tracking-wider transition-all border-red-500/30 text-red-400 hover:bg-red-500/10" } else { "px-3 py-1.5 rounded-md border text-xs font-bold uppercase tracking-wider transition-all border-white/10 text-gray-400 hover:border-white hover:text-white" },
                                                        onclick: {
                                                            let tag = tag.clone();
                                                            let managing = current.managing_tags;
                                                            move |_| {
                                                                if managing {
                                                                    store.dispatch(LibraryAction::DeleteTag(tag.clone()));
                                                                } else {
                                                                    draft.write().toggle_tag(&tag);
                                                                }
                                                            }
                                                        },
                                                        "{tag}"
                                                        if current.managing_tags {
                                                            span { class: "inline ml-1", "✕" }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            DrawerTab::Lore => rsx! {
                                div {
                                    class: "space-y-8",
                                    div {
                                        class: "space-y-2",
                                        FieldLabel { glyph: "❝", text: "Epitaph" }
                                        textarea {
                                            class: "w-full h-32 bg-white/5 border border-white/10 rounded-xl p-4 text-white text-lg font-serif italic focus:border-[#F5B800] focus:outline-none resize-none placeholder:text-gray-700",
                                            placeholder: "A brief description of their legacy...",
                                            value: "{current.epitaph}",
                                            oninput: move |evt| draft.write().epitaph = evt.value(),
                                        }
                                    }
                                    div {
                                        class: "space-y-4 pt-4 border-t border-white/10",
                                        FieldLabel { glyph: "⚙", text: "Display Config" }
                                        ToggleRow {
                                            label: "Show Epitaph",
                                            checked: current.show_epitaph,
                                            on_toggle: move |show| draft.write().show_epitaph = show,
                                        }
                                        ToggleRow {
                                            label: "Show Tags",
                                            checked: current.show_tags,
                                            on_toggle: move |show| draft.write().show_tags = show,
                                        }
                                    }
                                }
                            },
                        }
                    }

                    if let Some(message) = error() {
                        div {
                            class: "px-8 pb-2 text-xs font-bold uppercase tracking-widest text-red-400",
                            "{message}"
                        }
                    }

                    div {
                        class: "p-6 border-t border-white/10 bg-[#111] flex items-center justify-between gap-3",
                        if confirm_delete() {
                            div {
                                class: "flex items-center gap-2",
                                span { class: "text-xs font-bold uppercase tracking-widest text-red-400", "Erase this legend?" }
                                button {
                                    class: "px-4 py-3 rounded-xl bg-red-500/20 border border-red-500/40 text-xs font-bold uppercase tracking-widest text-red-300 hover:bg-red-500/30 transition-all",
                                    onclick: move |_| {
                                        tracing::info!(legend = %id, "Deleting legend");
                                        store.dispatch(LibraryAction::DeleteLegend(id));
                                        ui.close();
                                    },
                                    "Erase"
                                }
                                button {
                                    class: "px-4 py-3 rounded-xl text-xs font-bold uppercase tracking-widest text-gray-500 hover:text-white",
                                    onclick: move |_| confirm_delete.set(false),
                                    "Keep"
                                }
                            }
                        } else {
                            button {
                                class: "px-4 py-3 rounded-xl text-xs font-bold uppercase tracking-widest text-gray-600 hover:text-red-400 transition-colors",
                                onclick: move |_| confirm_delete.set(true),
                                "Delete Legend"
                            }
                        }
                        div {
                            class: "flex gap-3",
                            button {
                                class: "px-6 py-3 rounded-xl border border-white/10 text-xs font-bold uppercase tracking-widest text-gray-400 hover:text-white hover:bg-white/5 transition-all",
                                onclick: move |_| ui.close(),
                                "Cancel"
                            }
                            button {
                                class: "px-8 py-3 rounded-xl bg-[#F5B800] text-black text-xs font-bold uppercase tracking-widest hover:bg-white transition-all flex items-center gap-2 shadow-[0_0_20px_rgba(245,184,0,0.3)]",
                                onclick: save,
                                "✓ Save Changes"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(label: &'static str, active: bool, on_select: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "text-sm font-bold uppercase tracking-widest pb-1 border-b-2 transition-all",
            class: if active { "text-white border-[#F5B800]" } else { "text-gray-500 border-transparent hover:text-gray-300" },
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}

#[component]
fn FieldLabel(glyph: &'static str, text: &'static str) -> Element {
    rsx! {
        label {
            class: "flex items-center gap-2 text-[10px] font-bold uppercase tracking-widest text-gray-500",
            span { class: "text-[#F5B800]", "{glyph}" }
            "{text}"
        }
    }
}
