//! Moment viewer with debounced autosave.
//!
//! Edits land in a local [`MomentEditor`]. Each keystroke reschedules the
//! save; only the last one within the quiet period writes to the library,
//! and only the fields that changed. Leaving the viewer drops the pending
//! task with the component.

use dioxus::prelude::*;
use legends_domain::{LegendId, Moment, MomentKind};

use crate::application::timing::{AUTOSAVE_DEBOUNCE_MS, COPY_FEEDBACK_MS, SAVE_INDICATOR_MS};
use crate::application::{Debouncer, LibraryAction, MomentEditor};
use crate::presentation::state::use_library;
use crate::ui::use_platform;

#[component]
pub fn MomentViewer(legend_id: LegendId, moment: Moment) -> Element {
    let mut store = use_library();
    let platform = use_platform();

    let mut editor = use_signal(|| MomentEditor::new(legend_id, &moment));
    let mut autosave = use_signal(Debouncer::new);
    let mut saving = use_signal(|| false);
    let mut copied = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let moment_id = moment.id();
    let kind = moment.kind();
    let date = moment.display_date();
    let src = moment.src().map(str::to_string);
    let url = moment.url().map(str::to_string);
    let rating = moment.rating();

    let save_platform = platform.clone();
    let schedule_save = use_callback(move |_: ()| {
        let ticket = autosave.write().schedule();
        let platform = save_platform.clone();
        spawn(async move {
            platform.sleep_ms(AUTOSAVE_DEBOUNCE_MS).await;
            if !autosave.peek().is_current(ticket) {
                return;
            }
            let Some(patch) = editor.peek().pending_patch() else {
                return;
            };
            store.dispatch(LibraryAction::UpdateMoment {
                legend_id,
                moment_id,
                patch,
            });
            editor.write().mark_saved();
            tracing::debug!(%moment_id, "Moment autosaved");

            saving.set(true);
            platform.sleep_ms(SAVE_INDICATOR_MS).await;
            saving.set(false);
        });
    });

    let copy_platform = platform.clone();
    let copy = use_callback(move |_: ()| {
        copy_platform.copy_text(editor.peek().copy_text());
        copied.set(true);
        let platform = copy_platform.clone();
        spawn(async move {
            platform.sleep_ms(COPY_FEEDBACK_MS).await;
            copied.set(false);
        });
    });

    let mut close = move || {
        store.dispatch(LibraryAction::CloseMoment);
    };

    let fields = editor.read().clone();

    rsx! {
        div {
            class: "fixed inset-0 z-[250] flex items-center justify-center p-4 bg-black/90 backdrop-blur-sm",
            div { class: "absolute inset-0", onclick: move |_| close() }

            div {
                class: "w-full max-w-2xl bg-[#111] border border-white/5 rounded-2xl shadow-2xl overflow-hidden flex flex-col max-h-[90vh] z-10 relative",

                div {
                    class: "p-4 border-b border-white/5 flex justify-between items-center bg-black/50 shrink-0",
                    div {
                        class: "flex items-center gap-3",
                        button {
                            class: "p-2 -ml-2 rounded-full hover:bg-white/10 text-gray-400 hover:text-white transition-colors text-2xl leading-none",
                            onclick: move |_| close(),
                            "‹"
                        }
                        div {
                            class: "flex flex-col",
                            span {
                                class: "text-xs font-bold uppercase tracking-widest text-white flex items-center gap-2",
                                "Moment Details"
                                if saving() {
                                    span { class: "text-[#F5B800] animate-pulse ml-2", "Saving..." }
                                }
                            }
                            span { class: "text-[10px] text-gray-400 font-bold uppercase tracking-wider", "{date}" }
                        }
                    }
                    div {
                        class: "flex gap-2 relative",
                        if kind == MomentKind::Stat {
                            button {
                                class: "p-2 rounded-full hover:bg-white/10 transition-colors",
                                class: if copied() { "text-[#F5B800]" } else { "text-gray-400 hover:text-white" },
                                title: "Copy",
                                onclick: move |_| copy.call(()),
                                if copied() { "✓" } else { "⧉" }
                            }
                        }
                        button {
                            class: "p-2 rounded-full hover:bg-white/10 text-gray-400 hover:text-white transition-colors",
                            title: "Options",
                            onclick: move |_| menu_open.toggle(),
                            "⋯"
                        }
                        if menu_open() {
                            div { class: "fixed inset-0 z-40", onclick: move |_| menu_open.set(false) }
                            div {
                                class: "absolute right-0 top-12 w-48 bg-[#1a1a1a] border border-white/10 rounded-xl shadow-2xl z-50 overflow-hidden",
                                MenuItem {
                                    label: "Share",
                                    glyph: "⤴",
                                    on_pick: move |_| {
                                        platform.share(editor.peek().share_request());
                                        menu_open.set(false);
                                    },
                                }
                                MenuItem {
                                    label: (if copied() { "Copied" } else { "Copy" }),
                                    glyph: "⧉",
                                    on_pick: move |_| {
                                        copy.call(());
                                        menu_open.set(false);
                                    },
                                }
                                button {
                                    class: "w-full px-4 py-3 text-left text-xs font-bold uppercase tracking-widest text-red-400 hover:bg-red-500/10 flex items-center gap-3 border-t border-white/5",
                                    onclick: move |_| {
                                        tracing::info!(%moment_id, "Deleting moment");
                                        store.dispatch(LibraryAction::DeleteMoment(moment_id));
                                        close();
                                    },
                                    span { "🗑" }
                                    "Delete"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "overflow-y-auto custom-scrollbar flex-grow p-0 pb-6",
                    match kind {
                        MomentKind::Image | MomentKind::Video => rsx! {
                            div {
                                class: "w-full flex flex-col h-full",
                                div {
                                    class: "relative flex-grow bg-black/50 flex items-center justify-center min-h-[300px]",
                                    if kind == MomentKind::Video {
                                        div { class: "absolute z-10 pointer-events-none text-6xl text-white/80", "▶" }
                                    }
                                    if let Some(src) = src {
                                        img { src: "{src}", class: "max-w-full max-h-[60vh] w-auto h-auto object-contain mx-auto", alt: "Moment" }
                                    }
                                }
                                div {
                                    class: "p-6 space-y-4",
                                    input {
                                        class: "w-full bg-transparent border-none p-0 text-3xl font-display font-bold text-white placeholder:text-gray-600 focus:outline-none",
                                        placeholder: "Title",
                                        value: "{fields.caption()}",
                                        oninput: move |evt| {
                                            editor.write().set_caption(evt.value());
                                            schedule_save.call(());
                                        },
                                    }
                                    textarea {
                                        class: "w-full bg-transparent text-gray-300 text-sm font-serif leading-relaxed resize-none focus:outline-none",
                                        rows: 2,
                                        placeholder: "Add a description...",
                                        value: "{fields.description()}",
                                        oninput: move |evt| {
                                            editor.write().set_description(evt.value());
                                            schedule_save.call(());
                                        },
                                    }
                                }
                            }
                        },
                        MomentKind::Stat => rsx! {
                            div {
                                class: "p-8",
                                div {
                                    class: "p-6 bg-white/5 border-l-2 border-[#F5B800] relative overflow-hidden rounded-r-xl",
                                    div {
                                        class: "flex justify-between items-start mb-6 border-b border-white/10 pb-4 relative z-10",
                                        div {
                                            class: "flex items-center gap-3",
                                            span { class: "text-[#F5B800] text-xl", "⛨" }
                                            h3 { class: "text-white font-bold uppercase tracking-widest text-sm", "{fields.caption()}" }
                                        }
                                        if let Some(rating) = rating {
                                            div {
                                                class: "text-3xl font-black text-[#F5B800] leading-none tracking-tighter",
                                                "{rating}"
                                                span { class: "text-sm text-white/50 font-normal", "/10" }
                                            }
                                        }
                                    }
                                    div { class: "font-mono text-sm text-green-400/90 leading-relaxed whitespace-pre-wrap relative z-10", "{fields.body()}" }
                                }
                            }
                        },
                        MomentKind::Link => rsx! {
                            div {
                                class: "p-8",
                                div {
                                    class: "flex items-center gap-3 mb-6",
                                    span { class: "text-[#F5B800] text-2xl", "🔗" }
                                    input {
                                        class: "w-full bg-transparent text-3xl font-display font-bold text-white uppercase tracking-wide focus:outline-none border-b border-transparent focus:border-white/20 transition-colors",
                                        placeholder: "Uplink Title",
                                        value: "{fields.caption()}",
                                        oninput: move |evt| {
                                            editor.write().set_caption(evt.value());
                                            schedule_save.call(());
                                        },
                                    }
                                }
                                if let Some(url) = url {
                                    a {
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "w-full bg-blue-500/10 hover:bg-blue-500/20 text-blue-400 font-bold uppercase tracking-widest py-6 px-6 rounded-xl flex items-center justify-center gap-2 transition-all mb-6 text-sm",
                                        "Open Link ↗"
                                    }
                                }
                                textarea {
                                    class: "w-full h-32 bg-transparent border-l-2 border-white/20 pl-4 text-gray-300 text-sm italic font-serif focus:outline-none resize-none",
                                    placeholder: "Add a note about this link...",
                                    value: "{fields.body()}",
                                    oninput: move |evt| {
                                        editor.write().set_body(evt.value());
                                        schedule_save.call(());
                                    },
                                }
                            }
                        },
                        MomentKind::Note | MomentKind::Quote => rsx! {
                            div {
                                class: "p-8 h-full flex flex-col min-h-[50vh]",
                                input {
                                    class: "w-full bg-transparent text-4xl font-display font-bold text-white mb-6 focus:outline-none placeholder:text-white/20 border-none p-0",
                                    placeholder: "Title",
                                    value: "{fields.caption()}",
                                    oninput: move |evt| {
                                        editor.write().set_caption(evt.value());
                                        schedule_save.call(());
                                    },
                                }
                                if kind == MomentKind::Quote {
                                    span { class: "text-[#F5B800] text-4xl leading-none mb-2", "❝" }
                                }
                                textarea {
                                    class: "w-full flex-grow min-h-[40vh] bg-transparent text-gray-200 text-lg leading-relaxed font-serif whitespace-pre-wrap focus:outline-none resize-none placeholder:text-white/10 border-none p-0",
                                    class: if kind == MomentKind::Quote { "italic" } else { "" },
                                    placeholder: "Chronicle content...",
                                    value: "{fields.body()}",
                                    oninput: move |evt| {
                                        editor.write().set_body(evt.value());
                                        schedule_save.call(());
                                    },
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(label: &'static str, glyph: &'static str, on_pick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "w-full px-4 py-3 text-left text-xs font-bold uppercase tracking-widest text-gray-200 hover:bg-white/5 hover:text-white flex items-center gap-3",
            onclick: move |_| on_pick.call(()),
            span { "{glyph}" }
            "{label}"
        }
    }
}
