//! Client routes. Both pages share [`AppLayout`], which owns the navigation
//! chrome and every overlay.

use dioxus::prelude::*;

mod app_layout;

use crate::presentation::views::{DiscoverView, LibraryView};
use crate::ui::use_platform;
pub use app_layout::AppLayout;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        LibraryRoute {},
        #[route("/discover")]
        DiscoverRoute {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Window title for the page.
    pub fn page_title(&self) -> &'static str {
        match self {
            Route::LibraryRoute {} => "Legends",
            Route::DiscoverRoute {} => "Discover · Legends",
            Route::NotFound { .. } => "Lost · Legends",
        }
    }
}

/// Set the window title while a page is mounted.
fn use_page_title(route: Route) {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title(route.page_title());
    });
}

#[component]
pub fn LibraryRoute() -> Element {
    use_page_title(Route::LibraryRoute {});
    rsx! {
        LibraryView {}
    }
}

#[component]
pub fn DiscoverRoute() -> Element {
    use_page_title(Route::DiscoverRoute {});
    rsx! {
        DiscoverView {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!(%path, "Unknown route");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center h-full gap-6 text-white bg-[#0f1115]",
            p { class: "text-xl font-display uppercase tracking-widest text-gray-500", "Nothing recorded at /{path}" }
            Link {
                to: Route::LibraryRoute {},
                class: "px-6 py-3 rounded-xl bg-[#F5B800] text-black text-xs font-bold uppercase tracking-widest",
                "Return to Library"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::LibraryRoute {}));
        assert_eq!("/discover".parse::<Route>().ok(), Some(Route::DiscoverRoute {}));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/forgotten/realm".parse::<Route>().ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }

    #[test]
    fn routes_render_back_to_paths() {
        assert_eq!(Route::DiscoverRoute {}.to_string(), "/discover");
        assert_eq!(Route::LibraryRoute {}.page_title(), "Legends");
    }
}
