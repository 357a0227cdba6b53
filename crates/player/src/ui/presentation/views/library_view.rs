//! The library page: games or legends, in a grid or a list.

use dioxus::prelude::*;

use crate::application::{Layout, LibraryView as View};
use crate::presentation::components::library::{
    ControlDeck, GameGrid, GameList, LegendGrid, LegendList,
};
use crate::presentation::state::use_library;

#[component]
pub fn LibraryView() -> Element {
    let store = use_library();
    let (view, layout) = {
        let library = store.library.read();
        (library.view(), library.layout())
    };
    let title = match view {
        View::Games => "Games",
        View::Legends => "Legends",
    };

    rsx! {
        div {
            class: "mx-auto max-w-7xl p-4 md:p-6 min-h-[100vh] pt-24 md:pt-16 pb-32",
            header {
                class: "mb-10 mt-2 md:mt-8 relative animate-in fade-in slide-in-from-top-4 duration-700",
                div {
                    class: "text-center",
                    h1 {
                        class: "text-5xl md:text-7xl font-display font-bold uppercase tracking-normal text-white drop-shadow-2xl mb-2 leading-none transition-all",
                        "{title}"
                    }
                    div { class: "h-0.5 w-16 bg-gradient-to-r from-transparent via-[#F5B800] to-transparent shadow-[0_0_15px_rgba(245,184,0,0.6)] mx-auto mb-4" }
                }
            }

            ControlDeck {}

            match (view, layout) {
                (View::Games, Layout::Grid) => rsx! { GameGrid {} },
                (View::Games, Layout::List) => rsx! { GameList {} },
                (View::Legends, Layout::Grid) => rsx! { LegendGrid {} },
                (View::Legends, Layout::List) => rsx! { LegendList {} },
            }
        }
    }
}
