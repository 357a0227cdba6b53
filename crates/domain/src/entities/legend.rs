//! Legend entity - a user-authored character tied to a game
//!
//! # Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `LegendName` for the validated name
//! - **Builder pattern**: Fluent API for optional fields
//! - **Owned moments**: newest first, prepended on creation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::moment::{Moment, MomentPatch};
use crate::value_objects::{FocalPoint, LegendName};
use crate::{LegendId, MomentId};

/// Theme token for legends created without a realm cover.
pub const DEFAULT_LEGEND_COLOR: &str = "bg-gray-800";

/// A character profile and its journal.
///
/// # Example
///
/// ```
/// use legends_domain::{Legend, LegendName};
///
/// let legend = Legend::new(LegendName::new("Haldor").unwrap(), "Baldur's Gate 3");
///
/// assert_eq!(legend.name().as_str(), "Haldor");
/// assert!(legend.moments().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    id: LegendId,
    name: LegendName,
    game: String,
    epitaph: String,
    tags: Vec<String>,
    signature: Option<String>,
    visage: Option<String>,
    color: String,
    image_position: FocalPoint,
    show_epitaph: bool,
    show_tags: bool,
    gallery: Vec<String>,
    memories: Vec<Moment>,
}

impl Legend {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(name: LegendName, game: impl Into<String>) -> Self {
        Self {
            id: LegendId::new(),
            name,
            game: game.into(),
            epitaph: String::new(),
            tags: Vec::new(),
            signature: None,
            visage: None,
            color: DEFAULT_LEGEND_COLOR.to_string(),
            image_position: FocalPoint::CENTER,
            show_epitaph: true,
            show_tags: true,
            gallery: Vec::new(),
            memories: Vec::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with_id(mut self, id: LegendId) -> Self {
        self.id = id;
        self
    }

    pub fn with_epitaph(mut self, epitaph: impl Into<String>) -> Self {
        self.epitaph = epitaph.into();
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = Vec::new();
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_visage(mut self, visage: Option<String>) -> Self {
        self.visage = visage;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_image_position(mut self, position: FocalPoint) -> Self {
        self.image_position = position;
        self
    }

    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = gallery;
        self
    }

    /// Replace the moments. `moments` is expected newest first.
    pub fn with_moments(mut self, moments: Vec<Moment>) -> Self {
        self.memories = moments;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> LegendId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &LegendName {
        &self.name
    }

    /// Name of the game (realm) this legend belongs to.
    #[inline]
    pub fn game(&self) -> &str {
        &self.game
    }

    pub fn epitaph(&self) -> &str {
        &self.epitaph
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn visage(&self) -> Option<&str> {
        self.visage.as_deref()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn image_position(&self) -> FocalPoint {
        self.image_position
    }

    pub fn show_epitaph(&self) -> bool {
        self.show_epitaph
    }

    pub fn show_tags(&self) -> bool {
        self.show_tags
    }

    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    /// Moments, newest first.
    pub fn moments(&self) -> &[Moment] {
        &self.memories
    }

    pub fn moment(&self, id: MomentId) -> Option<&Moment> {
        self.memories.iter().find(|m| m.id() == id)
    }

    /// Date of the most recent moment, if any.
    pub fn latest_moment_date(&self) -> Option<NaiveDate> {
        self.memories.iter().map(Moment::date).max()
    }

    /// The portrait to show: the visage, else the first gallery image.
    pub fn active_image(&self) -> Option<&str> {
        self.visage()
            .or_else(|| self.gallery.first().map(String::as_str))
    }

    /// Image and video moments, in journal order.
    pub fn visual_moments(&self) -> Vec<&Moment> {
        self.memories
            .iter()
            .filter(|m| m.kind().is_visual())
            .collect()
    }

    /// Note, stat, link and quote moments, newest date first.
    pub fn written_moments(&self) -> Vec<&Moment> {
        let mut written: Vec<&Moment> = self
            .memories
            .iter()
            .filter(|m| !m.kind().is_visual())
            .collect();
        written.sort_by(|a, b| b.date().cmp(&a.date()));
        written
    }

    // =========================================================================
    // Mutation methods
    // =========================================================================

    pub fn set_name(&mut self, name: LegendName) {
        self.name = name;
    }

    pub fn set_game(&mut self, game: impl Into<String>) {
        self.game = game.into();
    }

    pub fn set_epitaph(&mut self, epitaph: impl Into<String>) {
        self.epitaph = epitaph.into();
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = Vec::new();
        for tag in tags {
            self.add_tag(tag);
        }
    }

    /// Add a trimmed tag. Returns `false` for blank or duplicate tags.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn set_visage(&mut self, visage: Option<String>) {
        self.visage = visage;
    }

    pub fn set_show_epitaph(&mut self, show: bool) {
        self.show_epitaph = show;
    }

    pub fn set_show_tags(&mut self, show: bool) {
        self.show_tags = show;
    }

    /// Add a moment at the front of the journal.
    pub fn prepend_moment(&mut self, moment: Moment) {
        self.memories.insert(0, moment);
    }

    /// Merge `patch` into the moment with `id`. Returns whether it was found.
    pub fn update_moment(&mut self, id: MomentId, patch: &MomentPatch) -> bool {
        match self.memories.iter_mut().find(|m| m.id() == id) {
            Some(moment) => {
                moment.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Remove the moment with `id`. Returns whether it was found.
    pub fn remove_moment(&mut self, id: MomentId) -> bool {
        let before = self.memories.len();
        self.memories.retain(|m| m.id() != id);
        self.memories.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::moment::{MomentContent, MomentKind};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn legend() -> Legend {
        Legend::new(LegendName::new("Haldor").unwrap(), "Baldur's Gate 3")
    }

    fn moment(kind: MomentKind, date: NaiveDate) -> Moment {
        Moment::new(MomentContent::empty(kind), date)
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_has_empty_collections_and_defaults() {
            let l = legend();
            assert!(l.moments().is_empty());
            assert!(l.gallery().is_empty());
            assert!(l.tags().is_empty());
            assert_eq!(l.visage(), None);
            assert_eq!(l.epitaph(), "");
            assert_eq!(l.color(), DEFAULT_LEGEND_COLOR);
            assert_eq!(l.image_position(), FocalPoint::CENTER);
        }

        #[test]
        fn builder_methods_work() {
            let l = legend()
                .with_epitaph("A warlock bound by a pact")
                .with_tags(["Warlock", "Roleplay", "Warlock"])
                .with_signature("Eldritch Blast");
            assert_eq!(l.epitaph(), "A warlock bound by a pact");
            assert_eq!(l.tags(), &["Warlock".to_string(), "Roleplay".to_string()]);
            assert_eq!(l.signature(), Some("Eldritch Blast"));
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn add_tag_trims_and_dedupes() {
            let mut l = legend();
            assert!(l.add_tag("  Tank "));
            assert!(!l.add_tag("Tank"));
            assert!(!l.add_tag("   "));
            assert_eq!(l.tags(), &["Tank".to_string()]);
        }

        #[test]
        fn remove_tag() {
            let mut l = legend().with_tags(["Tank", "DPS"]);
            assert!(l.remove_tag("Tank"));
            assert!(!l.has_tag("Tank"));
            assert!(l.has_tag("DPS"));
        }
    }

    mod moments {
        use super::*;

        #[test]
        fn prepend_puts_newest_first() {
            let mut l = legend();
            let older = moment(MomentKind::Note, day(2023, 1, 1));
            let newer = moment(MomentKind::Quote, day(2023, 2, 1));
            let newer_id = newer.id();
            l.prepend_moment(older);
            l.prepend_moment(newer);
            assert_eq!(l.moments()[0].id(), newer_id);
        }

        #[test]
        fn update_and_remove_by_id() {
            let mut l = legend();
            let m = moment(MomentKind::Note, day(2023, 1, 1));
            let id = m.id();
            l.prepend_moment(m);

            assert!(l.update_moment(id, &MomentPatch::new().caption("Renamed")));
            assert_eq!(l.moment(id).map(Moment::caption), Some("Renamed"));

            assert!(!l.update_moment(MomentId::new(), &MomentPatch::new().caption("x")));
            assert!(l.remove_moment(id));
            assert!(!l.remove_moment(id));
        }

        #[test]
        fn latest_moment_date() {
            let l = legend().with_moments(vec![
                moment(MomentKind::Note, day(2022, 3, 10)),
                moment(MomentKind::Note, day(2024, 1, 15)),
            ]);
            assert_eq!(l.latest_moment_date(), Some(day(2024, 1, 15)));
            assert_eq!(legend().latest_moment_date(), None);
        }

        #[test]
        fn visual_and_written_split() {
            let l = legend().with_moments(vec![
                moment(MomentKind::Image, day(2024, 1, 1)),
                moment(MomentKind::Note, day(2022, 1, 1)),
                moment(MomentKind::Stat, day(2023, 1, 1)),
                moment(MomentKind::Video, day(2021, 1, 1)),
            ]);
            assert_eq!(l.visual_moments().len(), 2);
            let written: Vec<NaiveDate> = l.written_moments().iter().map(|m| m.date()).collect();
            assert_eq!(written, vec![day(2023, 1, 1), day(2022, 1, 1)]);
        }
    }

    #[test]
    fn active_image_prefers_visage() {
        let l = legend().with_gallery(vec!["gallery.png".to_string()]);
        assert_eq!(l.active_image(), Some("gallery.png"));
        let l = l.with_visage(Some("visage.png".to_string()));
        assert_eq!(l.active_image(), Some("visage.png"));
    }
}
