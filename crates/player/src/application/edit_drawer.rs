//! Edit drawer: full-record editing of a legend.

use legends_domain::common::trimmed_non_empty;
use legends_domain::{DomainError, Legend, LegendName, TagCatalog};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerTab {
    #[default]
    Identity,
    Lore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDrawerDraft {
    pub name: String,
    pub game: String,
    pub epitaph: String,
    pub tags: Vec<String>,
    pub visage: Option<String>,
    pub show_epitaph: bool,
    pub show_tags: bool,
    pub new_tag: String,
    pub tab: DrawerTab,
    pub managing_tags: bool,
}

impl EditDrawerDraft {
    pub fn from_legend(legend: &Legend) -> Self {
        Self {
            name: legend.name().to_string(),
            game: legend.game().to_string(),
            epitaph: legend.epitaph().to_string(),
            tags: legend.tags().to_vec(),
            visage: legend.visage().map(str::to_string),
            show_epitaph: legend.show_epitaph(),
            show_tags: legend.show_tags(),
            new_tag: String::new(),
            tab: DrawerTab::Identity,
            managing_tags: false,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if self.has_tag(tag) {
            self.tags.retain(|t| t != tag);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Add the typed tag. Returns whether it was added; the input is
    /// cleared either way once it held something.
    pub fn add_custom_tag(&mut self) -> bool {
        let Some(tag) = trimmed_non_empty(&self.new_tag).map(str::to_string) else {
            return false;
        };
        self.new_tag.clear();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Tags offered as chips: the defaults plus the catalog.
    pub fn selectable_tags(catalog: &TagCatalog) -> Vec<String> {
        catalog.selectable()
    }

    /// Apply the draft to `legend`. Moments and every field the drawer
    /// does not show are kept.
    pub fn save(&self, legend: &Legend) -> Result<Legend, DomainError> {
        let mut updated = legend.clone();
        updated.set_name(LegendName::new(self.name.as_str())?);
        updated.set_game(self.game.as_str());
        updated.set_epitaph(self.epitaph.as_str());
        updated.set_tags(self.tags.clone());
        updated.set_visage(self.visage.clone());
        updated.set_show_epitaph(self.show_epitaph);
        updated.set_show_tags(self.show_tags);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use legends_domain::{Moment, MomentContent, DEFAULT_TAGS};

    fn legend() -> Legend {
        Legend::new(LegendName::new("Unthur").unwrap(), "Skyrim")
            .with_tags(["Stealth", "Archer"])
            .with_moments(vec![Moment::new(
                MomentContent::Note {
                    text: "Hail Sithis.".into(),
                },
                NaiveDate::from_ymd_opt(2011, 11, 11).unwrap(),
            )])
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut draft = EditDrawerDraft::from_legend(&legend());

        draft.toggle_tag("Tank");
        assert!(draft.has_tag("Tank"));

        draft.toggle_tag("Tank");
        assert!(!draft.has_tag("Tank"));
    }

    #[test]
    fn custom_tag_is_trimmed_and_deduplicated() {
        let mut draft = EditDrawerDraft::from_legend(&legend());

        draft.new_tag = "  Orc ".into();
        assert!(draft.add_custom_tag());
        assert!(draft.new_tag.is_empty());

        draft.new_tag = "Orc".into();
        assert!(!draft.add_custom_tag());
        assert_eq!(draft.tags, ["Stealth", "Archer", "Orc"]);
    }

    #[test]
    fn blank_custom_tag_is_ignored() {
        let mut draft = EditDrawerDraft::from_legend(&legend());
        draft.new_tag = "   ".into();

        assert!(!draft.add_custom_tag());
        assert_eq!(draft.tags.len(), 2);
    }

    #[test]
    fn save_keeps_moments_and_identity() {
        let original = legend();
        let mut draft = EditDrawerDraft::from_legend(&original);
        draft.name = "Unthur the Silent".into();
        draft.show_tags = false;
        draft.visage = Some("data:image/png;base64,AAAA".into());

        let saved = draft.save(&original).unwrap();

        assert_eq!(saved.id(), original.id());
        assert_eq!(saved.name().as_str(), "Unthur the Silent");
        assert!(!saved.show_tags());
        assert_eq!(saved.visage(), Some("data:image/png;base64,AAAA"));
        assert_eq!(saved.moments(), original.moments());
    }

    #[test]
    fn selectable_tags_include_defaults_and_catalog() {
        let mut catalog = TagCatalog::empty();
        catalog.merge(["Archer"]);

        let tags = EditDrawerDraft::selectable_tags(&catalog);

        assert_eq!(tags.len(), DEFAULT_TAGS.len() + 1);
        assert_eq!(tags.last().map(String::as_str), Some("Archer"));
    }
}
