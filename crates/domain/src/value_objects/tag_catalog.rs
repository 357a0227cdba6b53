//! The global tag catalog offered when tagging a legend.

use serde::{Deserialize, Serialize};

use crate::common::trimmed_non_empty;

/// Tags every catalog starts with.
pub const DEFAULT_TAGS: [&str; 18] = [
    "Tank",
    "DPS",
    "Support",
    "Healer",
    "Stealth",
    "Speedrun",
    "100%",
    "Hardcore",
    "Roleplay",
    "PvP",
    "PvE",
    "Boss Slayer",
    "Lore Master",
    "Pacifist",
    "Ironman",
    "Nuzlocke",
    "Soulslike",
    "Builder",
];

/// Insertion-ordered set of tags.
///
/// The catalog is independent of the legends: removing a tag here never
/// strips it from a legend that already carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    tags: Vec<String>,
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TagCatalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self { tags: Vec::new() }
    }

    /// A catalog seeded with [`DEFAULT_TAGS`].
    pub fn with_defaults() -> Self {
        let mut catalog = Self::empty();
        catalog.merge(DEFAULT_TAGS.iter().copied());
        catalog
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Set union with `tags`. Blank tags are ignored.
    ///
    /// Returns the tags that were not already present, in the order added.
    pub fn merge<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut added = Vec::new();
        for tag in tags {
            let Some(tag) = trimmed_non_empty(tag) else {
                continue;
            };
            if !self.contains(tag) {
                self.tags.push(tag.to_string());
                added.push(tag.to_string());
            }
        }
        added
    }

    /// Remove `tag` from the catalog. Returns whether it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Tags offered for selection: the defaults followed by the catalog's
    /// own additions, without repeats.
    ///
    /// Defaults are always offered, even after being removed from the
    /// catalog.
    pub fn selectable(&self) -> Vec<String> {
        let mut all = Self::with_defaults();
        all.merge(self.iter());
        all.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_defaults() {
        let catalog = TagCatalog::default();
        assert_eq!(catalog.len(), DEFAULT_TAGS.len());
        assert!(catalog.contains("Tank"));
        assert!(catalog.contains("Builder"));
    }

    #[test]
    fn merge_is_a_union() {
        let mut catalog = TagCatalog::with_defaults();
        let added = catalog.merge(["Tank", "Warlock", "Warlock", " ", "Dark Urge"]);
        assert_eq!(added, vec!["Warlock".to_string(), "Dark Urge".to_string()]);
        assert_eq!(catalog.len(), DEFAULT_TAGS.len() + 2);
    }

    #[test]
    fn remove_tag() {
        let mut catalog = TagCatalog::with_defaults();
        assert!(catalog.remove("Tank"));
        assert!(!catalog.contains("Tank"));
        assert!(!catalog.remove("Tank"));
    }

    #[test]
    fn selectable_keeps_defaults_and_additions() {
        let mut catalog = TagCatalog::empty();
        catalog.merge(["Warlock", "Tank"]);
        let selectable = catalog.selectable();
        assert_eq!(selectable.len(), DEFAULT_TAGS.len() + 1);
        assert_eq!(selectable.first().map(String::as_str), Some("Tank"));
        assert_eq!(selectable.last().map(String::as_str), Some("Warlock"));
    }
}
