//! Layering rules.
//!
//! The domain crate stays a plain data model: no UI, runtime, HTTP or
//! browser crates. Inside the player crate the application layer may not
//! reach into infrastructure or the UI.

use std::fmt;

use regex_lite::Regex;

use crate::metadata::Metadata;

pub const DOMAIN_PACKAGE: &str = "legends-domain";

/// Crates the domain may never depend on. A trailing `*` matches a prefix.
pub const DOMAIN_FORBIDDEN: &[&str] = &[
    "dioxus*",
    "tokio",
    "reqwest",
    "web-sys",
    "js-sys",
    "wasm-bindgen*",
    "gloo-*",
    "arboard",
    "legends-player",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub location: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

fn matches_pattern(pattern: &str, name: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => name.starts_with(prefix),
        None => pattern == name,
    }
}

/// Check the domain manifest's normal dependencies.
pub fn check_manifests(metadata: &Metadata) -> Vec<Violation> {
    let Some(domain) = metadata.package(DOMAIN_PACKAGE) else {
        return vec![Violation {
            location: "Cargo.toml".to_string(),
            message: format!("workspace has no {DOMAIN_PACKAGE} package"),
        }];
    };

    domain
        .dependencies
        .iter()
        .filter(|dep| dep.is_normal())
        .filter(|dep| DOMAIN_FORBIDDEN.iter().any(|p| matches_pattern(p, &dep.name)))
        .map(|dep| Violation {
            location: format!("{DOMAIN_PACKAGE}/Cargo.toml"),
            message: format!("forbidden dependency `{}`", dep.name),
        })
        .collect()
}

/// A banned import pattern applied to every source file under `dir`.
pub struct SourceRule {
    pub dir: &'static str,
    pub pattern: &'static str,
    pub reason: &'static str,
}

pub const SOURCE_RULES: &[SourceRule] = &[
    SourceRule {
        dir: "crates/domain/src",
        pattern: r"\b(dioxus|tokio|reqwest|web_sys|wasm_bindgen|legends_player)::",
        reason: "domain code must stay free of UI, runtime and I/O crates",
    },
    SourceRule {
        dir: "crates/player/src/application",
        pattern: r"\b(dioxus::|crate::(infrastructure|ui|presentation)\b)",
        reason: "application layer must not depend on the UI or adapters",
    },
];

impl SourceRule {
    pub fn check(&self, file: &str, source: &str) -> Vec<Violation> {
        let Ok(re) = Regex::new(self.pattern) else {
            return vec![Violation {
                location: file.to_string(),
                message: format!("invalid rule pattern `{}`", self.pattern),
            }];
        };

        source
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
            .filter(|(_, line)| re.is_match(line))
            .map(|(n, line)| Violation {
                location: format!("{file}:{}", n + 1),
                message: format!("{} (`{}`)", self.reason, line.trim()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod manifests {
        use super::*;

        fn metadata(deps: &[(&str, Option<&str>)]) -> Metadata {
            let deps: Vec<serde_json::Value> = deps
                .iter()
                .map(|(name, kind)| serde_json::json!({ "name": name, "kind": kind }))
                .collect();
            let raw = serde_json::json!({
                "packages": [{ "name": DOMAIN_PACKAGE, "dependencies": deps }]
            });
            Metadata::parse(raw.to_string().as_bytes()).unwrap()
        }

        #[test]
        fn clean_domain_passes() {
            let meta = metadata(&[("serde", None), ("uuid", None), ("thiserror", None)]);

            assert!(check_manifests(&meta).is_empty());
        }

        #[test]
        fn ui_and_runtime_crates_are_flagged() {
            let meta = metadata(&[("dioxus-core", None), ("tokio", None), ("serde", None)]);

            let names: Vec<String> = check_manifests(&meta)
                .into_iter()
                .map(|v| v.message)
                .collect();
            assert_eq!(
                names,
                vec![
                    "forbidden dependency `dioxus-core`".to_string(),
                    "forbidden dependency `tokio`".to_string(),
                ]
            );
        }

        #[test]
        fn dev_dependencies_are_allowed() {
            let meta = metadata(&[("tokio", Some("dev"))]);

            assert!(check_manifests(&meta).is_empty());
        }
    }

    mod sources {
        use super::*;

        #[test]
        fn domain_import_of_dioxus_is_reported_with_line() {
            let source = "use serde::Serialize;\nuse dioxus::prelude::*;\n";

            let found = SOURCE_RULES[0].check("crates/domain/src/lib.rs", source);

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].location, "crates/domain/src/lib.rs:2");
        }

        #[test]
        fn application_may_not_reach_infrastructure() {
            let source = "use crate::infrastructure::create_game_search;\nuse crate::ports::outbound::GameSearchPort;\n";

            let found = SOURCE_RULES[1].check("library.rs", source);

            assert_eq!(found.len(), 1);
        }

        #[test]
        fn comments_are_ignored() {
            let source = "// unlike dioxus::prelude, this stays pure\n";

            assert!(SOURCE_RULES[0].check("lib.rs", source).is_empty());
        }
    }
}
