//! Discovery feed: every legend's moments newest first, plus a ranking of
//! legends by their latest moment. Filters live here and never touch the
//! library.

use dioxus::prelude::*;
use legends_domain::{Game, Legend, LegendId, Moment};

use crate::application::{derive_feed, ContentFilter, FeedMoment, FeedQuery, FeedTab, LibraryAction};
use crate::presentation::state::use_library;

const TAB_UNDERLINE: &str = "absolute bottom-0 left-0 right-0 h-0.5 bg-[#F5B800] shadow-[0_0_10px_#F5B800]";

/// An owned copy of a feed row, so it can cross a component boundary.
#[derive(Clone, PartialEq)]
struct FeedEntry {
    moment: Moment,
    legend_id: LegendId,
    legend_name: String,
    legend_game: String,
    legend_visage: Option<String>,
    legend_color: String,
}

impl From<&FeedMoment<'_>> for FeedEntry {
    fn from(row: &FeedMoment<'_>) -> Self {
        Self {
            moment: row.moment.clone(),
            legend_id: row.legend_id,
            legend_name: row.legend_name.to_string(),
            legend_game: row.legend_game.to_string(),
            legend_visage: row.legend_visage.map(str::to_string),
            legend_color: row.legend_color.to_string(),
        }
    }
}

#[component]
pub fn DiscoverView() -> Element {
    let store = use_library();
    let mut query = use_signal(FeedQuery::default);
    let mut filter_open = use_signal(|| false);

    let current = query.read().clone();
    let (moments, legends) = {
        let library = store.library.read();
        let feed = derive_feed(library.legends(), &current);
        let moments: Vec<FeedEntry> = feed.moments.iter().map(FeedEntry::from).collect();
        let legends: Vec<Legend> = feed.legends.into_iter().cloned().collect();
        (moments, legends)
    };
    let filtered = current.has_active_filters();

    rsx! {
        div {
            class: "w-full max-w-7xl mx-auto pb-32 min-h-screen",

            div {
                class: "hidden md:block sticky top-0 z-40 bg-[#0a0a0a]/95 backdrop-blur-xl border-b border-white/10",
                div {
                    class: "max-w-4xl mx-auto flex flex-col",
                    div {
                        class: "h-24 flex items-center",
                        h2 { class: "text-6xl font-display font-black uppercase text-white tracking-normal", "Discover" }
                    }
                    FeedTabs {
                        tab: current.tab,
                        filtered,
                        on_tab: move |tab| query.write().tab = tab,
                        on_filter: move |_| filter_open.set(true),
                    }
                }
            }

            div {
                class: "md:hidden px-4 pt-20 pb-2",
                h1 { class: "text-5xl font-display font-black uppercase text-white tracking-normal", "Discover" }
            }
            div {
                class: "md:hidden sticky top-0 z-30 bg-[#0a0a0a]/95 backdrop-blur-xl border-b border-white/10 py-2",
                FeedTabs {
                    tab: current.tab,
                    filtered,
                    on_tab: move |tab| query.write().tab = tab,
                    on_filter: move |_| filter_open.set(true),
                }
            }

            div {
                class: "max-w-4xl mx-auto px-4 md:px-0 pt-6",
                if current.shows_moments() {
                    div {
                        class: "flex flex-col gap-8 animate-in fade-in slide-in-from-bottom-4 duration-500",
                        if moments.is_empty() {
                            div { class: "text-center py-20 opacity-50", "No moments found." }
                        }
                        for entry in moments.iter() {
                            FeedMomentCard {
                                key: "{entry.legend_id}-{entry.moment.id()}",
                                entry: entry.clone(),
                            }
                        }
                    }
                }
                if current.shows_legends() && !legends.is_empty() {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-6 animate-in fade-in slide-in-from-bottom-4 duration-500 mt-8",
                        for legend in legends.iter() {
                            FeedLegendCard { key: "{legend.id()}", legend: legend.clone() }
                        }
                    }
                }
                div {
                    class: "text-center mt-24 pb-12 opacity-50",
                    span { class: "block text-2xl text-gray-700 mb-2", "🔥" }
                    p { class: "text-[10px] font-bold uppercase tracking-[0.2em] text-gray-600", "End of the Stream" }
                }
            }

            if filter_open() {
                FilterSheet { query, on_close: move |_| filter_open.set(false) }
            }
        }
    }
}

#[component]
fn FeedTabs(
    tab: FeedTab,
    filtered: bool,
    on_tab: EventHandler<FeedTab>,
    on_filter: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between pb-3 px-4 md:px-0 w-full max-w-4xl mx-auto",
            div {
                class: "flex items-center gap-6 md:gap-10",
                for (value, label) in [(FeedTab::ForYou, "For You"), (FeedTab::Following, "Following")] {
                    button {
                        key: "{label}",
                        class: "text-sm md:text-base font-bold uppercase tracking-widest transition-all relative py-2",
                        class: if tab == value { "text-white" } else { "text-gray-500 hover:text-gray-300" },
                        onclick: move |_| on_tab.call(value),
                        "{label}"
                        if tab == value {
                            div { class: TAB_UNDERLINE }
                        }
                    }
                }
            }
            button {
                class: "p-2 rounded-full transition-all text-lg",
                class: if filtered { "text-[#F5B800] bg-[#F5B800]/10" } else { "text-gray-400 hover:text-white hover:bg-white/10" },
                title: "Filter Feed",
                onclick: move |_| on_filter.call(()),
                "☰"
            }
        }
    }
}

#[component]
fn FeedMomentCard(entry: FeedEntry) -> Element {
    let mut store = use_library();
    let legend_id = entry.legend_id;
    let mut open = move || {
        store.dispatch(LibraryAction::OpenLegend(legend_id));
    };

    let moment = &entry.moment;
    let kind = moment.kind();
    let caption = if moment.caption().trim().is_empty() {
        "Untitled Moment".to_string()
    } else {
        moment.caption().to_string()
    };
    let blurb = moment
        .body()
        .filter(|b| !b.trim().is_empty())
        .or(moment.description())
        .filter(|b| !b.trim().is_empty())
        .unwrap_or("No description provided...")
        .to_string();
    let thumbnail = moment.src().filter(|_| kind.is_visual()).map(str::to_string);
    let date = moment.display_date();
    let likes = moment.likes().unwrap_or_default();
    let comments = moment.comments().unwrap_or_default();

    rsx! {
        div {
            class: "group bg-[#121212] border border-white/10 rounded-2xl overflow-hidden hover:border-[#F5B800]/50 hover:shadow-[0_0_30px_rgba(245,184,0,0.3)] transition-all duration-300 flex flex-col md:flex-row h-auto md:h-56",
            div {
                class: "w-full md:w-1/3 shrink-0 relative cursor-pointer overflow-hidden border-b md:border-b-0 md:border-r border-white/5 h-48 md:h-auto",
                onclick: move |_| open(),
                if let Some(src) = thumbnail {
                    img { src: "{src}", class: "w-full h-full object-cover transition-opacity duration-700 hover:opacity-90", alt: "Moment" }
                } else {
                    div {
                        class: "w-full h-full bg-gradient-to-br {entry.legend_color} flex items-center justify-center",
                        span { class: "text-4xl text-white/20", "✒" }
                    }
                }
                div {
                    class: "absolute top-3 left-3 bg-black/60 backdrop-blur px-2 py-1 rounded-md border border-white/10",
                    span { class: "text-[10px] font-bold uppercase tracking-widest text-white", "{kind}" }
                }
            }
            div {
                class: "flex-grow p-6 flex flex-col justify-between",
                div {
                    class: "flex items-center gap-2 mb-3",
                    div {
                        class: "h-5 w-5 rounded bg-gray-800 overflow-hidden",
                        if let Some(visage) = entry.legend_visage.as_ref() {
                            img { src: "{visage}", class: "w-full h-full object-cover" }
                        }
                    }
                    span {
                        class: "text-[10px] font-bold uppercase tracking-widest text-[#F5B800] cursor-pointer hover:underline",
                        onclick: move |_| open(),
                        "{entry.legend_name}"
                    }
                    span { class: "text-gray-600 text-xs", "›" }
                    span { class: "text-[10px] font-bold uppercase tracking-widest text-gray-500", "{entry.legend_game}" }
                    span { class: "text-[10px] text-gray-600 ml-auto", "{date}" }
                }
                div {
                    class: "cursor-pointer",
                    onclick: move |_| open(),
                    h3 { class: "text-xl font-bold font-display tracking-wide text-white mb-2 line-clamp-1 group-hover:text-[#F5B800] transition-colors", "{caption}" }
                    p { class: "text-sm text-gray-400 font-serif leading-relaxed line-clamp-2 md:line-clamp-3", "{blurb}" }
                }
                div {
                    class: "flex items-center gap-6 mt-4 pt-4 border-t border-white/5 text-gray-500",
                    span { class: "flex items-center gap-2 text-xs font-bold", "♥ {likes}" }
                    span { class: "flex items-center gap-2 text-xs font-bold", "💬 {comments}" }
                }
            }
        }
    }
}

#[component]
fn FeedLegendCard(legend: Legend) -> Element {
    let mut store = use_library();
    let id = legend.id();
    let moment_count = legend.moments().len();

    rsx! {
        div {
            class: "group relative aspect-video cursor-pointer overflow-hidden rounded-2xl bg-[#121212] border border-white/10 hover:border-[#F5B800]/50 transition-all duration-300 hover:-translate-y-2 hover:shadow-[0_0_30px_rgba(245,184,0,0.3)]",
            onclick: move |_| {
                store.dispatch(LibraryAction::OpenLegend(id));
            },
            div { class: "absolute inset-0 bg-gradient-to-br {legend.color()} opacity-40" }
            div { class: "absolute inset-0 bg-black/60 group-hover:bg-black/40 transition-colors" }
            if let Some(visage) = legend.visage() {
                img { src: "{visage}", class: "absolute inset-0 w-full h-full object-cover opacity-50 mix-blend-overlay transition-opacity duration-700" }
            }
            div {
                class: "absolute inset-0 p-6 flex flex-col justify-end",
                div {
                    class: "flex justify-between items-end z-10",
                    div {
                        div {
                            class: "flex items-center gap-2 mb-1",
                            span { class: "text-[#F5B800] text-xs", "🎮" }
                            span { class: "text-[10px] font-bold uppercase tracking-widest text-[#F5B800]", "{legend.game()}" }
                        }
                        h3 { class: "text-4xl font-display font-bold uppercase text-white leading-none tracking-tight", "{legend.name()}" }
                    }
                    div {
                        class: "text-right",
                        span { class: "block text-xl font-bold text-white", "{moment_count}" }
                        span { class: "text-[10px] text-gray-500 font-bold uppercase tracking-widest", "Moments" }
                    }
                }
                div { class: "absolute inset-0 border-2 border-[#F5B800]/0 transition-all duration-300 group-hover:border-[#F5B800]/20 rounded-2xl pointer-events-none" }
            }
        }
    }
}

#[component]
fn FilterSheet(mut query: Signal<FeedQuery>, on_close: EventHandler<()>) -> Element {
    let store = use_library();
    let current = query.read().clone();
    let games: Vec<Game> = current
        .searchable_games(store.library.read().games())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "fixed inset-0 z-[200] flex items-end md:items-center justify-center pointer-events-none",
            div {
                class: "absolute inset-0 bg-black/80 backdrop-blur-sm pointer-events-auto transition-opacity",
                onclick: move |_| on_close.call(()),
            }
            div {
                class: "bg-[#111] w-full md:max-w-md rounded-t-3xl md:rounded-2xl border-t md:border border-white/10 shadow-2xl pointer-events-auto animate-slide-up max-h-[85vh] flex flex-col",
                div {
                    class: "p-6 border-b border-white/10 flex justify-between items-center",
                    h3 {
                        class: "text-lg font-bold uppercase tracking-widest text-white flex items-center gap-2",
                        span { class: "text-[#F5B800]", "☰" }
                        "Filter Feed"
                    }
                    button { class: "text-gray-500 hover:text-white", onclick: move |_| on_close.call(()), "✕" }
                }

                div {
                    class: "p-6 overflow-y-auto custom-scrollbar space-y-8",
                    div {
                        class: "space-y-4",
                        label { class: "text-[10px] font-bold uppercase tracking-widest text-gray-500", "Content Type" }
                        div {
                            class: "flex p-1 bg-white/5 rounded-xl border border-white/10",
                            for filter in ContentFilter::ALL {
                                button {
                                    key: "{filter.label()}",
                                    class: "flex-1 py-2 rounded-lg text-xs font-bold uppercase tracking-widest transition-all",
                                    class: if current.content == filter { "bg-[#F5B800] text-black shadow-lg" } else { "text-gray-400 hover:text-white" },
                                    onclick: move |_| query.write().content = filter,
                                    "{filter.label()}"
                                }
                            }
                        }
                    }
                    div {
                        class: "space-y-4",
                        label { class: "text-[10px] font-bold uppercase tracking-widest text-gray-500", "Game" }
                        input {
                            class: "w-full bg-white/5 border border-white/10 rounded-lg py-2 px-4 text-xs text-white focus:outline-none focus:border-[#F5B800]/50 transition-all placeholder:text-gray-600",
                            placeholder: "Search games...",
                            value: "{current.game_search}",
                            oninput: move |evt| query.write().game_search = evt.value(),
                        }
                        div {
                            class: "space-y-2 max-h-48 overflow-y-auto custom-scrollbar pr-2",
                            for game in games.iter() {
                                GameFilterRow {
                                    key: "{game.id}",
                                    name: game.name.clone(),
                                    selected: current.games.contains(&game.name),
                                    on_toggle: move |name: String| query.write().toggle_game(&name),
                                }
                            }
                        }
                    }
                }

                div {
                    class: "p-6 border-t border-white/10 bg-black/50 backdrop-blur-sm flex gap-4",
                    button {
                        class: "flex-1 py-3 rounded-xl border border-white/10 text-xs font-bold uppercase tracking-widest text-gray-400 hover:text-white transition-colors",
                        onclick: move |_| {
                            query.write().clear();
                            on_close.call(());
                        },
                        "Clear All"
                    }
                    button {
                        class: "flex-[2] py-3 rounded-xl bg-[#F5B800] text-black text-xs font-bold uppercase tracking-widest hover:bg-[#ffc94d] transition-colors shadow-[0_0_20px_rgba(251,189,35,0.2)]",
                        onclick: move |_| on_close.call(()),
                        "Apply Filters"
                    }
                }
            }
        }
    }
}

#[component]
fn GameFilterRow(name: String, selected: bool, on_toggle: EventHandler<String>) -> Element {
    let picked = name.clone();
    rsx! {
        button {
            class: "w-full flex items-center justify-between p-3 rounded-xl border transition-all",
            class: if selected { "bg-[#F5B800]/10 border-[#F5B800] text-white" } else { "bg-transparent border-white/5 text-gray-400 hover:bg-white/5" },
            onclick: move |_| on_toggle.call(picked.clone()),
            span { class: "text-sm font-bold", "{name}" }
            if selected {
                span { class: "text-[#F5B800] text-sm", "✓" }
            }
        }
    }
}
