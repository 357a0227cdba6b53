//! Shared page frame: navigation, the scroll container the chrome listens
//! to, and the overlay stack.

use dioxus::prelude::*;

use super::Route;
use crate::presentation::components::{
    EditDrawer, ForgeModal, FoundryOverlay, MomentViewer, NavigationSidebar, SmartFab, Tapestry,
};
use crate::presentation::state::{use_library, use_ui_state, Overlay};
use crate::presentation::utils::dom;
use crate::ui::ShellKind;

const SCROLL_ID: &str = "legends-scroll";

#[component]
pub fn AppLayout() -> Element {
    let store = use_library();
    let mut ui = use_ui_state();
    let shell = use_context::<ShellKind>();

    let (selected, viewing) = {
        let library = store.library.read();
        (
            library.selected_legend().cloned(),
            library
                .viewing_moment()
                .map(|(legend, moment)| (legend.id(), moment.clone())),
        )
    };
    let selected_id = selected.as_ref().map(|l| l.id());
    let overlay = ui.overlay.read().clone();
    let drawer_legend = match overlay {
        Overlay::EditDrawer(id) => store.library.read().legend(id).cloned(),
        _ => None,
    };

    rsx! {
        div {
            class: "h-full bg-[#0f1115] text-gray-100 font-sans selection:bg-[#F5B800]/30 relative",

            NavigationSidebar {
                on_forge: move |_| ui.open_forge(),
                on_inscribe: move |_| ui.open_foundry(selected_id, None),
            }

            main {
                id: SCROLL_ID,
                class: "w-full h-full overflow-y-auto pl-0 md:pl-20 transition-all duration-300",
                onscroll: move |_| async move {
                    if let Some(y) = dom::scroll_top(SCROLL_ID).await {
                        ui.on_scroll(y);
                    }
                },
                Outlet::<Route> {}
            }

            if let Some(legend) = selected {
                Tapestry { key: "{legend.id()}", legend }
            }

            match overlay {
                Overlay::None => rsx! {},
                Overlay::Forge => rsx! { ForgeModal {} },
                Overlay::Foundry { target, kind } => rsx! { FoundryOverlay { target, kind } },
                Overlay::EditDrawer(_) => rsx! {
                    if let Some(legend) = drawer_legend {
                        EditDrawer { key: "{legend.id()}", legend }
                    }
                },
            }

            if let Some((legend_id, moment)) = viewing {
                MomentViewer { key: "{moment.id()}", legend_id, moment }
            }

            if shell == ShellKind::Mobile {
                SmartFab {
                    legend_selected: selected_id.is_some(),
                    on_inscribe: move |_| ui.open_foundry(selected_id, None),
                    on_forge: move |_| ui.open_forge(),
                }
            }
        }
    }
}
