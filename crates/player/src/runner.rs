use std::sync::Arc;

use crate::application::GameSearchService;
use crate::ports::outbound::GameSearchPort;
use crate::state::Platform;

/// Configuration types for the player runner.
pub mod config {
    use std::str::FromStr;

    use crate::infrastructure::IgdbConfig;

    pub const SHELL_VAR: &str = "LEGENDS_SHELL";
    pub const IGDB_CLIENT_ID_VAR: &str = "LEGENDS_IGDB_CLIENT_ID";
    pub const IGDB_ACCESS_TOKEN_VAR: &str = "LEGENDS_IGDB_ACCESS_TOKEN";
    pub const IGDB_PROXY_URL_VAR: &str = "LEGENDS_IGDB_PROXY_URL";

    /// Viewport width (px) below which the web build uses the mobile shell.
    pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl ShellKind {
        pub fn for_width(width: f64) -> Self {
            if width < MOBILE_BREAKPOINT_PX {
                Self::Mobile
            } else {
                Self::Desktop
            }
        }
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct PlayerConfig {
        pub shell: ShellKind,
        pub igdb: IgdbConfig,
    }

    impl PlayerConfig {
        /// Build the config from a variable lookup. Unknown shells fall
        /// back to the default with a warning.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let shell = match lookup(SHELL_VAR) {
                Some(raw) => raw.parse::<ShellKind>().unwrap_or_else(|e: String| {
                    tracing::warn!(error = %e, "Ignoring {SHELL_VAR}");
                    ShellKind::default()
                }),
                None => ShellKind::default(),
            };

            let igdb = IgdbConfig {
                client_id: lookup(IGDB_CLIENT_ID_VAR).unwrap_or_default(),
                access_token: lookup(IGDB_ACCESS_TOKEN_VAR).unwrap_or_default(),
                proxy_url: lookup(IGDB_PROXY_URL_VAR).filter(|url| !url.trim().is_empty()),
            };

            Self { shell, igdb }
        }

        /// Read the process environment (after `.env`, when present).
        #[cfg(not(target_arch = "wasm32"))]
        pub fn from_env() -> Self {
            if let Err(e) = dotenvy::dotenv() {
                tracing::debug!(error = %e, "No .env file loaded");
            }
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// The browser has no environment; only the viewport decides.
        #[cfg(target_arch = "wasm32")]
        pub fn from_env() -> Self {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);
            Self {
                shell: ShellKind::for_width(width),
                igdb: IgdbConfig::default(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| vars.get(key).cloned()
        }

        #[test]
        fn parses_shell_kinds() {
            assert_eq!(" Mobile ".parse::<ShellKind>(), Ok(ShellKind::Mobile));
            assert_eq!("desktop".parse::<ShellKind>(), Ok(ShellKind::Desktop));
            assert!("tablet".parse::<ShellKind>().is_err());
        }

        #[test]
        fn narrow_viewports_are_mobile() {
            assert_eq!(ShellKind::for_width(390.0), ShellKind::Mobile);
            assert_eq!(ShellKind::for_width(768.0), ShellKind::Desktop);
        }

        #[test]
        fn empty_environment_uses_defaults() {
            let config = PlayerConfig::from_lookup(lookup(&[]));

            assert_eq!(config, PlayerConfig::default());
            assert!(!config.igdb.is_configured());
        }

        #[test]
        fn reads_credentials_and_proxy() {
            let config = PlayerConfig::from_lookup(lookup(&[
                (SHELL_VAR, "mobile"),
                (IGDB_CLIENT_ID_VAR, "abc"),
                (IGDB_ACCESS_TOKEN_VAR, "xyz"),
                (IGDB_PROXY_URL_VAR, "https://proxy.local/"),
            ]));

            assert_eq!(config.shell, ShellKind::Mobile);
            assert!(config.igdb.is_configured());
            assert_eq!(config.igdb.proxy_url.as_deref(), Some("https://proxy.local/"));
        }

        #[test]
        fn blank_proxy_and_bad_shell_are_ignored() {
            let config = PlayerConfig::from_lookup(lookup(&[
                (SHELL_VAR, "watch"),
                (IGDB_PROXY_URL_VAR, "  "),
            ]));

            assert_eq!(config.shell, ShellKind::Desktop);
            assert_eq!(config.igdb.proxy_url, None);
        }
    }
}

use config::PlayerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub game_search: Arc<dyn GameSearchPort>,
    pub config: PlayerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        game_search,
        config,
    } = deps;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!(
            "<style>{}</style>{}",
            crate::ui::GLOBAL_CSS,
            crate::ui::TAILWIND_SCRIPT
        );
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(config.shell)
        .with_context(crate::ui::presentation::Services::new(
            GameSearchService::new(game_search),
        ))
        .launch(crate::ui::app);
}
