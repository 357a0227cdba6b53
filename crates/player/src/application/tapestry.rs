//! Tapestry detail view: inline edits, tags and sharing.

use legends_domain::common::trimmed_non_empty;
use legends_domain::{DomainError, Legend, LegendName};

use crate::ports::outbound::ShareRequest;

/// Tags shown before the "+N More" toggle.
pub const MAX_VISIBLE_TAGS: usize = 5;

/// Inline edits of name, epitaph and realm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapestryDraft {
    pub name: String,
    pub epitaph: String,
    pub game: String,
}

impl TapestryDraft {
    pub fn from_legend(legend: &Legend) -> Self {
        Self {
            name: legend.name().to_string(),
            epitaph: legend.epitaph().to_string(),
            game: legend.game().to_string(),
        }
    }

    /// The updated legend, or `None` when no field changed.
    pub fn commit(&self, legend: &Legend) -> Result<Option<Legend>, DomainError> {
        if *self == Self::from_legend(legend) {
            return Ok(None);
        }
        let mut updated = legend.clone();
        updated.set_name(LegendName::new(self.name.as_str())?);
        updated.set_epitaph(self.epitaph.as_str());
        updated.set_game(self.game.as_str());
        Ok(Some(updated))
    }
}

/// `legend` with `tag` appended, or `None` for a blank or repeated tag.
pub fn with_added_tag(legend: &Legend, tag: &str) -> Option<Legend> {
    let tag = trimmed_non_empty(tag)?;
    if legend.has_tag(tag) {
        return None;
    }
    let mut updated = legend.clone();
    updated.add_tag(tag);
    Some(updated)
}

/// Tags to render and how many are hidden behind the toggle.
pub fn visible_tags(legend: &Legend, show_all: bool) -> (&[String], usize) {
    let tags = legend.tags();
    if show_all || tags.len() <= MAX_VISIBLE_TAGS {
        (tags, 0)
    } else {
        (&tags[..MAX_VISIBLE_TAGS], tags.len() - MAX_VISIBLE_TAGS)
    }
}

pub fn share_payload(legend: &Legend, url: Option<String>) -> ShareRequest {
    ShareRequest {
        title: legend.name().to_string(),
        text: format!("Check out {} in Legends.", legend.name()),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haldor() -> Legend {
        Legend::new(LegendName::new("Haldor").unwrap(), "Baldur's Gate 3")
            .with_epitaph("A warlock bound by a pact.")
            .with_tags(["Warlock", "Roleplay"])
    }

    mod inline_edits {
        use super::*;

        #[test]
        fn unchanged_draft_commits_nothing() {
            let legend = haldor();

            let draft = TapestryDraft::from_legend(&legend);

            assert_eq!(draft.commit(&legend).unwrap(), None);
        }

        #[test]
        fn changed_epitaph_commits_update() {
            let legend = haldor();
            let mut draft = TapestryDraft::from_legend(&legend);
            draft.epitaph = "He remembers now.".into();

            let updated = draft.commit(&legend).unwrap().unwrap();

            assert_eq!(updated.epitaph(), "He remembers now.");
            assert_eq!(updated.id(), legend.id());
            assert_eq!(updated.tags(), legend.tags());
        }

        #[test]
        fn blank_name_is_rejected() {
            let legend = haldor();
            let mut draft = TapestryDraft::from_legend(&legend);
            draft.name = "  ".into();

            assert!(draft.commit(&legend).is_err());
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn adds_trimmed_tag() {
            let updated = with_added_tag(&haldor(), "  DPS ").unwrap();

            assert!(updated.has_tag("DPS"));
        }

        #[test]
        fn ignores_blank_and_duplicate_tags() {
            assert!(with_added_tag(&haldor(), "   ").is_none());
            assert!(with_added_tag(&haldor(), "Warlock").is_none());
        }

        #[test]
        fn caps_visible_tags() {
            let legend = haldor().with_tags(["a", "b", "c", "d", "e", "f", "g"]);

            let (shown, hidden) = visible_tags(&legend, false);
            assert_eq!(shown.len(), MAX_VISIBLE_TAGS);
            assert_eq!(hidden, 2);

            let (shown, hidden) = visible_tags(&legend, true);
            assert_eq!(shown.len(), 7);
            assert_eq!(hidden, 0);
        }
    }

    #[test]
    fn share_text_names_the_legend() {
        let payload = share_payload(&haldor(), Some("https://legends.example/".into()));

        assert_eq!(payload.title, "Haldor");
        assert_eq!(payload.text, "Check out Haldor in Legends.");
        assert_eq!(payload.url.as_deref(), Some("https://legends.example/"));
    }
}
