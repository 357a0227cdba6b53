use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use crate::runner::config::ShellKind;
pub use crate::state::Platform;
pub use routes::Route;

/// Global styles, inlined into the desktop head by the runner.
pub const GLOBAL_CSS: &str = include_str!("../../assets/css/main.css");

/// Tailwind's play CDN compiles the utility classes at runtime.
pub const TAILWIND_SCRIPT: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();

    // These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::LibraryStore::seeded);
    use_context_provider(presentation::state::UiState::new);

    rsx! {
        // The desktop runner inlines both into the window head instead.
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet {
                href: asset!("/assets/css/main.css"),
            }
            document::Script {
                src: "https://cdn.tailwindcss.com",
            }
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Router::<routes::Route> {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Router::<routes::Route> {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "legends-shell bg-[#0f1115] text-gray-100",
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // The mobile shell hides the desktop rail and pins the smart FAB;
        // the layout reads the shell kind from context.
        div {
            class: "legends-shell legends-shell--mobile bg-[#0f1115] text-gray-100",
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}
