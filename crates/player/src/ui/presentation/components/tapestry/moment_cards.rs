//! Cards for a legend's moments: visual captures in the carousel and
//! written entries in the log.

use dioxus::prelude::*;
use legends_domain::{Moment, MomentKind};

use crate::presentation::utils::styles::rating_bars;

#[component]
pub fn WrittenMomentCard(moment: Moment, on_open: EventHandler<()>) -> Element {
    let date = moment.display_date();
    let body = moment.body().unwrap_or_default().to_string();
    let caption = moment.caption().to_string();

    match moment.kind() {
        MomentKind::Stat => {
            let filled = moment.rating().map(rating_bars);
            rsx! {
                div {
                    class: "group relative p-6 bg-[#1a1d23] border border-white/10 hover:border-[#F5B800]/50 rounded-2xl cursor-pointer transition-all duration-300 overflow-hidden",
                    onclick: move |_| on_open.call(()),
                    div { class: "absolute inset-0 opacity-5 bg-[radial-gradient(#ffffff_1px,transparent_1px)] [background-size:16px_16px]" }
                    div {
                        class: "flex items-center gap-3 mb-4 relative z-10",
                        div { class: "p-2 rounded bg-[#F5B800]/10 text-[#F5B800]", "⛨" }
                        span { class: "text-[10px] font-bold uppercase tracking-widest text-[#F5B800]", "System Log" }
                        span { class: "ml-auto text-[10px] text-gray-600 font-mono", "{date}" }
                    }
                    h4 {
                        class: "font-bold text-white uppercase tracking-wide mb-3",
                        if caption.is_empty() { "Build Data" } else { "{caption}" }
                    }
                    p { class: "font-mono text-sm text-gray-400 whitespace-pre-wrap leading-relaxed", "{body}" }
                    if let Some(filled) = filled {
                        div {
                            class: "mt-4 pt-4 border-t border-white/5 flex items-center justify-between",
                            span { class: "text-[10px] text-gray-500 font-bold uppercase", "Efficiency" }
                            div {
                                class: "flex gap-1",
                                for bar in 0..5usize {
                                    div {
                                        key: "{bar}",
                                        class: if bar < filled { "h-1.5 w-4 rounded-full bg-[#F5B800]" } else { "h-1.5 w-4 rounded-full bg-gray-800" },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        MomentKind::Link => {
            let url = moment.url().unwrap_or_default().to_string();
            rsx! {
                div {
                    class: "group p-6 bg-blue-950/10 border border-blue-500/20 hover:bg-blue-900/20 hover:border-blue-400/50 rounded-2xl cursor-pointer transition-all duration-300",
                    onclick: move |_| on_open.call(()),
                    div {
                        class: "flex items-center justify-between mb-6",
                        div { class: "p-2 rounded-full bg-blue-500/20 text-blue-400", "🔗" }
                        span { class: "text-blue-400/50 group-hover:text-blue-400 transition-colors", "↗" }
                    }
                    h4 {
                        class: "font-bold text-blue-100 text-lg mb-2 group-hover:underline decoration-blue-400/50 underline-offset-4",
                        if caption.is_empty() { "External Uplink" } else { "{caption}" }
                    }
                    p { class: "text-sm text-blue-200/60 line-clamp-2 mb-4 break-all", "{url}" }
                    if !body.is_empty() {
                        p { class: "text-xs text-gray-400 border-t border-blue-500/10 pt-4 mt-4", "{body}" }
                    }
                }
            }
        }
        MomentKind::Quote => rsx! {
            div {
                class: "group p-6 bg-white/5 border border-white/10 hover:border-white/30 rounded-2xl cursor-pointer transition-all duration-300 flex flex-col items-center justify-center text-center min-h-[160px]",
                onclick: move |_| on_open.call(()),
                span { class: "text-2xl text-[#F5B800] mb-4 opacity-50 group-hover:opacity-100 transition-opacity", "❝" }
                p { class: "font-serif italic text-lg text-gray-200 leading-relaxed", "\"{body}\"" }
                if !caption.is_empty() {
                    p { class: "mt-4 text-[10px] font-bold uppercase tracking-widest text-gray-500", "{caption}" }
                }
            }
        },
        _ => rsx! {
            div {
                class: "group relative p-6 glass-card bg-[#1a1d23]/40 border border-white/5 hover:border-[#F5B800]/30 rounded-2xl cursor-pointer transition-all duration-300",
                onclick: move |_| on_open.call(()),
                div {
                    class: "flex items-center gap-3 mb-4",
                    div {
                        class: "w-8 h-8 rounded-lg bg-white/5 flex items-center justify-center text-gray-400 group-hover:text-[#F5B800] transition-colors",
                        "✒"
                    }
                    div {
                        h4 {
                            class: "font-semibold text-white group-hover:text-[#F5B800] transition-colors font-display tracking-wide text-sm md:text-base",
                            if caption.is_empty() { "Journal Entry" } else { "{caption}" }
                        }
                        p { class: "text-[10px] text-gray-500 uppercase tracking-wider", "{date}" }
                    }
                }
                div {
                    class: "text-gray-400 leading-relaxed pl-3 border-l border-white/10 group-hover:border-[#F5B800]/30 transition-colors",
                    p { class: "line-clamp-3 font-serif italic text-base md:text-lg", "{body}" }
                }
            }
        },
    }
}

/// A screen capture in the visual carousel.
#[component]
pub fn VisualMomentCard(moment: Moment, wide: bool, on_open: EventHandler<()>) -> Element {
    let src = moment.src().unwrap_or_default().to_string();
    let is_video = moment.kind() == MomentKind::Video;
    let width = if wide { "min-w-[60%]" } else { "min-w-[85vw]" };

    rsx! {
        div {
            class: "{width} snap-center cursor-pointer group",
            onclick: move |_| on_open.call(()),
            div {
                class: "aspect-video glass-card overflow-hidden rounded-2xl relative border border-white/5 hover:border-[#F5B800]/50 shadow-lg bg-[#1a1d23] transition-all",
                img {
                    src: "{src}",
                    class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-105",
                    alt: "{moment.caption()}",
                }
                if wide {
                    div { class: "absolute inset-0 bg-black/40 group-hover:bg-transparent transition-colors" }
                }
                if is_video {
                    div {
                        class: "absolute inset-0 flex items-center justify-center text-5xl text-white/80",
                        "▶"
                    }
                }
                div {
                    class: "absolute bottom-0 left-0 right-0 p-4 md:p-6 bg-gradient-to-t from-black/80 to-transparent",
                    p { class: "text-white font-bold uppercase tracking-widest text-xs md:text-sm", "{moment.caption()}" }
                }
            }
        }
    }
}
