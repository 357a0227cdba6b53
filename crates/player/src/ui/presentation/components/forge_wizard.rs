//! Forge wizard overlay: pick a realm, name the legend, watch it forge.

use dioxus::prelude::*;
use legends_domain::common::eq_ignore_case;
use legends_domain::Game;

use crate::application::timing::{FORGE_CEREMONY_MS, SEARCH_DEBOUNCE_MS};
use crate::application::{
    Debouncer, ForgeStep, ForgeWizard, GameSearchService, LibraryAction, RealmChoice,
};
use crate::presentation::components::common::ImageInput;
use crate::presentation::components::FocalPointPicker;
use crate::presentation::services::use_game_search_service;
use crate::presentation::state::{use_library, use_ui_state, LibraryStore, UiState};
use crate::presentation::utils::dom;
use crate::presentation::utils::styles::{glow_color, object_position};
use crate::state::Platform;
use crate::ui::use_platform;

const PORTRAIT_INPUT_ID: &str = "forge-portrait";

/// Start the ceremony, then create the legend once it has played out.
fn forge_legend(
    mut wizard: Signal<ForgeWizard>,
    mut store: LibraryStore,
    mut ui: UiState,
    platform: Platform,
) {
    let new_legend = match wizard.write().begin_forging() {
        Ok(new_legend) => new_legend,
        Err(e) => {
            tracing::debug!(error = %e, "Forge not ready");
            return;
        }
    };
    spawn(async move {
        platform.sleep_ms(FORGE_CEREMONY_MS).await;
        store.dispatch(LibraryAction::CreateLegend(new_legend));
        ui.close();
    });
}

/// Remote results that are not in the catalog already.
fn unseen_remote(remote: &[Game], offered: &[RealmChoice]) -> Vec<Game> {
    remote
        .iter()
        .filter(|game| !offered.iter().any(|realm| eq_ignore_case(&realm.name, &game.name)))
        .cloned()
        .collect()
}

#[component]
pub fn ForgeModal() -> Element {
    let mut store = use_library();
    let mut ui = use_ui_state();
    let platform = use_platform();
    let search_service = use_game_search_service();

    let mut wizard = use_signal(ForgeWizard::new);
    let mut remote = use_signal(Vec::<Game>::new);
    let mut searching = use_signal(|| false);
    let mut search_debounce = use_signal(Debouncer::new);

    let state = wizard.read().clone();
    let (realms, is_new_realm) = {
        let library = store.library.read();
        (
            state.filtered_realms(library.games(), library.legends()),
            state.query_is_new_realm(library.games(), library.legends()),
        )
    };
    let discovered = unseen_remote(&remote.read(), &realms);
    let accent = state.accent_color();
    let glow = glow_color(accent);
    let realm_name = state.realm().map(|r| r.name.clone()).unwrap_or_default();
    let realm_cover = state
        .realm()
        .map(|r| r.cover.clone())
        .unwrap_or_else(|| "bg-gray-800".to_string());
    let portrait = state.portrait().map(str::to_string);
    let position = object_position(state.focal_point());
    let query = state.query().to_string();
    let legend_name = state.name().to_string();
    let forging = state.step() == ForgeStep::Forging;
    let step_number = match state.step() {
        ForgeStep::SelectRealm => 1,
        _ => 2,
    };

    let search_platform = platform.clone();
    let key_platform = platform.clone();

    rsx! {
        div {
            class: "fixed inset-0 z-[300] bg-[#0f1115] flex flex-col overflow-hidden overscroll-none animate-forge-reveal",
            style: "{glow}",

            // Atmosphere
            div {
                class: "absolute inset-0 z-0",
                div {
                    class: "absolute inset-x-0 -top-24 h-[50vh] opacity-30 blur-[120px] animate-atmosphere-glow",
                    style: "background: {accent};",
                }
                if let Some(src) = portrait.clone() {
                    img {
                        src: "{src}",
                        class: "w-full h-full object-cover opacity-20 filter blur-xl transition-all duration-1000 scale-110",
                        style: "{position}",
                        alt: "Atmosphere",
                    }
                } else {
                    div { class: "w-full h-full opacity-10 transition-all duration-1000 {realm_cover}" }
                }
                div { class: "absolute inset-0 bg-gradient-to-b from-[#0f1115]/80 via-[#0f1115] to-[#0f1115]" }
            }

            if !forging {
                div {
                    class: "relative z-50 flex items-center justify-between p-6",
                    div {
                        class: "flex items-center gap-2",
                        div { class: "w-2 h-2 rounded-full shadow-glow", style: "background: {accent};" }
                        span { class: "text-[10px] font-bold uppercase tracking-[.4em] text-white/40", "Hall of Legends" }
                    }
                    button {
                        class: "p-3 rounded-full bg-white/5 text-white/60 hover:text-white hover:bg-white/10 transition-all border border-white/10",
                        onclick: move |_| ui.close(),
                        "✕"
                    }
                }
            }

            div {
                class: "relative z-10 flex-grow flex flex-col justify-center items-center p-8 h-full overflow-y-auto custom-scrollbar",
                div {
                    class: "w-full min-h-full flex flex-col justify-center items-center py-20",

                    match state.step() {
                        ForgeStep::Forging => rsx! {
                            div {
                                class: "flex flex-col items-center justify-center text-center space-y-12",
                                div {
                                    class: "relative w-[30vh] aspect-[3/4.5] rounded-3xl overflow-hidden shadow-glow border border-white/20",
                                    if let Some(src) = portrait.clone() {
                                        img { src: "{src}", class: "w-full h-full object-cover animate-breathing", style: "{position}", alt: "Forging" }
                                    } else {
                                        div { class: "w-full h-full animate-pulse {realm_cover}" }
                                    }
                                    div { class: "absolute inset-0 bg-gradient-to-t from-black via-transparent to-transparent opacity-80" }
                                    div {
                                        class: "absolute bottom-0 left-0 right-0 p-8",
                                        h2 { class: "text-3xl font-display font-bold text-white uppercase tracking-tight", "{legend_name}" }
                                        div { class: "h-0.5 w-12 bg-white/40 mt-3 mx-auto translate-y-2" }
                                    }
                                }
                                div {
                                    class: "space-y-3",
                                    div { class: "text-white font-display font-black uppercase tracking-[.6em] text-2xl animate-pulse", "Forging Legend" }
                                    p { class: "text-[10px] text-white/40 uppercase tracking-widest", "Constructing Chronicles in {realm_name}" }
                                }
                            }
                        },
                        ForgeStep::SelectRealm => rsx! {
                            div {
                                class: "max-w-5xl w-full space-y-12 animate-slide-up text-center flex flex-col justify-center",
                                div {
                                    class: "space-y-4",
                                    h1 { class: "text-5xl md:text-8xl font-display font-black uppercase text-white tracking-tighter leading-none", "Select The Realm" }
                                    div { class: "h-1 w-24 mx-auto shadow-glow opacity-80", style: "background: {accent};" }
                                }
                                div {
                                    class: "w-full max-w-lg mx-auto relative group",
                                    span { class: "absolute left-6 top-1/2 -translate-y-1/2 text-white/30 group-focus-within:text-white transition-colors", "⌕" }
                                    input {
                                        class: "w-full bg-white/5 border border-white/10 rounded-full py-5 pl-16 pr-6 text-white text-lg placeholder:text-white/10 focus:outline-none focus:border-white/30 transition-all backdrop-blur-md",
                                        placeholder: "Search library or name a new realm...",
                                        value: "{query}",
                                        oninput: move |evt| {
                                            let query = evt.value();
                                            wizard.write().set_query(query.clone());
                                            let ticket = search_debounce.write().schedule();
                                            if !GameSearchService::is_searchable(&query) {
                                                remote.set(Vec::new());
                                                return;
                                            }
                                            let platform = search_platform.clone();
                                            let service = search_service.clone();
                                            spawn(async move {
                                                platform.sleep_ms(SEARCH_DEBOUNCE_MS).await;
                                                if !search_debounce.peek().is_current(ticket) {
                                                    return;
                                                }
                                                searching.set(true);
                                                let found = service.search(&query).await;
                                                if search_debounce.peek().is_current(ticket) {
                                                    remote.set(found);
                                                }
                                                searching.set(false);
                                            });
                                        },
                                    }
                                    if searching() {
                                        span { class: "absolute right-6 top-1/2 -translate-y-1/2 text-[10px] font-bold uppercase tracking-widest text-white/40 animate-pulse", "Searching" }
                                    }
                                }
                                div {
                                    class: "w-full overflow-x-auto py-8 scrollbar-hide snap-x flex gap-6 px-4 md:px-12 items-center justify-start h-[45vh]",
                                    for realm in realms.iter() {
                                        RealmCard {
                                            key: "{realm.name}",
                                            realm: realm.clone(),
                                            selected: realm.name == realm_name,
                                            on_select: {
                                                let realm = realm.clone();
                                                move |_| {
                                                    if let Err(e) = wizard.write().select_realm(realm.clone()) {
                                                        tracing::warn!(error = %e, "Realm not selected");
                                                    }
                                                }
                                            },
                                        }
                                    }
                                    for game in discovered.iter() {
                                        RealmCard {
                                            key: "{game.id}",
                                            realm: RealmChoice::from(game),
                                            selected: false,
                                            on_select: {
                                                let game = game.clone();
                                                move |_| {
                                                    store.dispatch(LibraryAction::AddGame(game.clone()));
                                                    if let Err(e) = wizard.write().select_realm(RealmChoice::from(&game)) {
                                                        tracing::warn!(error = %e, "Realm not selected");
                                                    }
                                                }
                                            },
                                        }
                                    }
                                    if is_new_realm {
                                        button {
                                            class: "snap-center shrink-0 w-[200px] aspect-[10/14] rounded-2xl border-2 border-dashed border-white/10 hover:border-white transition-all flex flex-col items-center justify-center gap-4 group bg-white/5",
                                            onclick: {
                                                let query = query.clone();
                                                move |_| {
                                                    let games = store.library.peek().games().to_vec();
                                                    let named = wizard.write().name_new_realm(&query, &games);
                                                    match named {
                                                        Ok(Some(game)) => {
                                                            store.dispatch(LibraryAction::AddGame(game));
                                                        }
                                                        Ok(None) => {}
                                                        Err(e) => tracing::warn!(error = %e, "Realm not named"),
                                                    }
                                                }
                                            },
                                            div {
                                                class: "w-16 h-16 rounded-full border-2 border-dashed border-white/20 flex items-center justify-center text-3xl text-white/40 group-hover:text-white group-hover:scale-110 transition-transform",
                                                "+"
                                            }
                                            div {
                                                class: "text-center px-4",
                                                span { class: "text-[10px] font-bold uppercase tracking-widest text-white/40 mb-1 block", "New Realm" }
                                                span { class: "text-xl font-display font-bold uppercase text-white truncate max-w-full block", "{query}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        ForgeStep::Identity => rsx! {
                            div {
                                class: "max-w-4xl w-full text-center space-y-12 animate-slide-up",
                                div {
                                    class: "space-y-4",
                                    div {
                                        class: "flex items-center justify-center gap-4",
                                        div { class: "h-px w-8 bg-white/20" }
                                        span { class: "text-[11px] font-bold uppercase tracking-[.4em] text-white/60", "{realm_name}" }
                                        div { class: "h-px w-8 bg-white/20" }
                                    }
                                    h1 { class: "text-5xl md:text-8xl font-display font-black uppercase text-white leading-none tracking-tight", "Who Is This Legend?" }
                                }
                                div {
                                    class: "w-full max-w-2xl mx-auto relative group",
                                    input {
                                        class: "w-full bg-transparent border-none text-center text-6xl md:text-9xl font-display font-black text-white focus:outline-none placeholder:text-white/10 transition-all",
                                        placeholder: "ENTER NAME",
                                        autofocus: true,
                                        value: "{legend_name}",
                                        oninput: move |evt| wizard.write().set_name(evt.value()),
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter && wizard.peek().can_forge() {
                                                forge_legend(wizard, store, ui, key_platform.clone());
                                            }
                                        },
                                    }
                                    div {
                                        class: "absolute bottom-0 left-1/2 -translate-x-1/2 w-48 h-1 bg-white/10 rounded-full overflow-hidden",
                                        div {
                                            class: "h-full bg-[#F5B800] transition-all duration-500",
                                            style: if state.can_forge() { "width: 100%;" } else { "width: 0%;" },
                                        }
                                    }
                                }
                                div {
                                    class: "flex flex-col items-center gap-8 pt-4",
                                    ImageInput {
                                        id: PORTRAIT_INPUT_ID.to_string(),
                                        on_pick: move |data_url: String| wizard.write().set_portrait(Some(data_url)),
                                    }
                                    button {
                                        class: "group flex flex-col items-center gap-4 p-8 rounded-3xl border-2 border-dashed border-white/10 hover:border-[#F5B800]/40 transition-all bg-white/5",
                                        onclick: move |_| dom::click_element(PORTRAIT_INPUT_ID),
                                        div { class: "p-4 rounded-full bg-white/5 text-2xl text-white/40 group-hover:text-[#F5B800] group-hover:scale-110 group-hover:bg-[#F5B800]/10 transition-all", "⇪" }
                                        span {
                                            class: "text-[10px] font-bold uppercase tracking-[.3em] text-white/40 group-hover:text-white",
                                            if portrait.is_some() { "Change Portrait" } else { "Add Portrait (Optional)" }
                                        }
                                    }
                                    if let Some(src) = portrait.clone() {
                                        div {
                                            class: "w-full max-w-xl",
                                            div {
                                                class: "bg-white/5 border border-white/10 p-8 rounded-[40px] backdrop-blur-2xl shadow-2xl",
                                                h4 { class: "text-[10px] font-bold uppercase tracking-widest text-white/40 mb-6 text-left", "Refine Focal Point" }
                                                FocalPointPicker {
                                                    src,
                                                    value: state.focal_point(),
                                                    on_change: move |point| wizard.write().set_focal_point(point),
                                                }
                                            }
                                        }
                                    }
                                }
                                div {
                                    class: "flex flex-col items-center gap-6 pt-4",
                                    button {
                                        class: "group relative px-16 py-5 rounded-full bg-white text-black font-black uppercase tracking-[.2em] hover:bg-[#F5B800] transition-all disabled:opacity-20 disabled:cursor-not-allowed transform hover:scale-[1.02] shadow-glow",
                                        disabled: !state.can_forge(),
                                        onclick: move |_| forge_legend(wizard, store, ui, platform.clone()),
                                        "Forge Legend"
                                    }
                                    button {
                                        class: "flex items-center gap-2 text-[10px] font-bold uppercase tracking-widest text-white/40 hover:text-white transition-colors",
                                        onclick: move |_| {
                                            if let Err(e) = wizard.write().back() {
                                                tracing::debug!(error = %e, "Forge back ignored");
                                            }
                                        },
                                        "‹ Back"
                                    }
                                }
                            }
                        },
                    }
                }
            }

            if !forging {
                div {
                    class: "absolute bottom-12 left-0 right-0 flex justify-center gap-4 z-50",
                    for s in 1..=2 {
                        div {
                            key: "{s}",
                            class: if s <= step_number { "h-1 rounded-full transition-all duration-700 w-12 shadow-glow" } else { "h-1 rounded-full transition-all duration-700 w-2 opacity-20" },
                            style: if s <= step_number { "background: {accent};" } else { "background: white;" },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RealmCard(realm: RealmChoice, selected: bool, on_select: EventHandler<()>) -> Element {
    let border = if selected {
        "border-white scale-110 z-10 shadow-glow"
    } else {
        "border-white/10 hover:border-white/40 hover:scale-[1.05]"
    };

    rsx! {
        button {
            class: "snap-center shrink-0 w-[200px] aspect-[10/14] rounded-2xl overflow-hidden border-2 transition-all transform group relative {border}",
            onclick: move |_| on_select.call(()),
            if let Some(src) = realm.image.as_deref() {
                img { src: "{src}", class: "absolute inset-0 w-full h-full object-cover opacity-60 group-hover:opacity-80 transition-opacity", alt: "{realm.name}" }
            } else {
                div { class: "absolute inset-0 opacity-40 group-hover:opacity-60 transition-opacity {realm.cover}" }
            }
            div {
                class: "absolute inset-0 bg-gradient-to-t from-black via-black/20 to-transparent p-6 flex flex-col justify-end text-left",
                span { class: "text-xl font-display font-bold uppercase tracking-tight text-white drop-shadow-2xl", "{realm.name}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_results_already_offered_are_hidden() {
        let offered = vec![RealmChoice::from(&Game::new("skyrim", "Skyrim", "bg-slate-700"))];
        let remote = vec![
            Game::new("igdb-1", "SKYRIM", "bg-gray-800"),
            Game::new("igdb-2", "Hades", "bg-gray-800"),
        ];

        let unseen = unseen_remote(&remote, &offered);

        assert_eq!(unseen.len(), 1);
        assert_eq!(unseen[0].name, "Hades");
    }
}
