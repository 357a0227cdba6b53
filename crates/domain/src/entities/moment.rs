//! Moment entity - a single journal entry owned by a Legend
//!
//! The entry's type decides which fields exist, so the content is a tagged
//! union rather than one record with optional fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::format_moment_date;
use crate::error::DomainError;
use crate::MomentId;

/// The discriminant of [`MomentContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentKind {
    Image,
    Video,
    Stat,
    Note,
    Link,
    Quote,
}

impl MomentKind {
    pub const ALL: [MomentKind; 6] = [
        Self::Image,
        Self::Video,
        Self::Stat,
        Self::Note,
        Self::Link,
        Self::Quote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Stat => "stat",
            Self::Note => "note",
            Self::Link => "link",
            Self::Quote => "quote",
        }
    }

    /// Image and video moments are shown in the visual carousel.
    pub fn is_visual(&self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

impl fmt::Display for MomentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MomentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "stat" => Ok(Self::Stat),
            "note" => Ok(Self::Note),
            "link" => Ok(Self::Link),
            "quote" => Ok(Self::Quote),
            _ => Err(DomainError::parse(format!("Unknown moment type: {}", s))),
        }
    }
}

/// Type-specific content of a moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MomentContent {
    Image { src: String, description: String },
    Video { src: String, description: String },
    Stat { readout: String, rating: Option<u8> },
    Note { text: String },
    Link { url: String, note: String },
    Quote { text: String },
}

impl MomentContent {
    /// Content of the given kind with every field empty.
    pub fn empty(kind: MomentKind) -> Self {
        match kind {
            MomentKind::Image => Self::Image {
                src: String::new(),
                description: String::new(),
            },
            MomentKind::Video => Self::Video {
                src: String::new(),
                description: String::new(),
            },
            MomentKind::Stat => Self::Stat {
                readout: String::new(),
                rating: None,
            },
            MomentKind::Note => Self::Note {
                text: String::new(),
            },
            MomentKind::Link => Self::Link {
                url: String::new(),
                note: String::new(),
            },
            MomentKind::Quote => Self::Quote {
                text: String::new(),
            },
        }
    }

    pub fn kind(&self) -> MomentKind {
        match self {
            Self::Image { .. } => MomentKind::Image,
            Self::Video { .. } => MomentKind::Video,
            Self::Stat { .. } => MomentKind::Stat,
            Self::Note { .. } => MomentKind::Note,
            Self::Link { .. } => MomentKind::Link,
            Self::Quote { .. } => MomentKind::Quote,
        }
    }
}

/// Partial update for a moment. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MomentPatch {
    pub caption: Option<String>,
    /// Note text, stat readout, quote text or the note under a link
    pub body: Option<String>,
    /// Image and video description
    pub description: Option<String>,
    pub is_pinned: Option<bool>,
    /// Stat rating
    pub rating: Option<u8>,
}

impl MomentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = Some(pinned);
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A timestamped journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    id: MomentId,
    caption: String,
    date: NaiveDate,
    #[serde(default)]
    is_pinned: bool,
    #[serde(default)]
    likes: Option<u32>,
    #[serde(default)]
    comments: Option<u32>,
    #[serde(flatten)]
    content: MomentContent,
}

impl Moment {
    pub fn new(content: MomentContent, date: NaiveDate) -> Self {
        Self {
            id: MomentId::new(),
            caption: String::new(),
            date,
            is_pinned: false,
            likes: None,
            comments: None,
            content,
        }
    }

    // --- Builder methods ---

    pub fn with_id(mut self, id: MomentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    pub fn with_social(mut self, likes: u32, comments: u32) -> Self {
        self.likes = Some(likes);
        self.comments = Some(comments);
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> MomentId {
        self.id
    }

    pub fn kind(&self) -> MomentKind {
        self.content.kind()
    }

    pub fn content(&self) -> &MomentContent {
        &self.content
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn display_date(&self) -> String {
        format_moment_date(self.date)
    }

    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    pub fn likes(&self) -> Option<u32> {
        self.likes
    }

    pub fn comments(&self) -> Option<u32> {
        self.comments
    }

    /// The written text of the moment, if its type has any.
    pub fn body(&self) -> Option<&str> {
        match &self.content {
            MomentContent::Stat { readout, .. } => Some(readout),
            MomentContent::Note { text } | MomentContent::Quote { text } => Some(text),
            MomentContent::Link { note, .. } => Some(note),
            MomentContent::Image { .. } | MomentContent::Video { .. } => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.content {
            MomentContent::Image { description, .. } | MomentContent::Video { description, .. } => {
                Some(description)
            }
            _ => None,
        }
    }

    pub fn src(&self) -> Option<&str> {
        match &self.content {
            MomentContent::Image { src, .. } | MomentContent::Video { src, .. } => Some(src),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.content {
            MomentContent::Link { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn rating(&self) -> Option<u8> {
        match &self.content {
            MomentContent::Stat { rating, .. } => *rating,
            _ => None,
        }
    }

    // --- Mutation methods ---

    /// Merge `patch` into this moment.
    ///
    /// Fields the moment's type does not carry are ignored.
    pub fn apply_patch(&mut self, patch: &MomentPatch) {
        if let Some(caption) = &patch.caption {
            self.caption = caption.clone();
        }
        if let Some(pinned) = patch.is_pinned {
            self.is_pinned = pinned;
        }
        match &mut self.content {
            MomentContent::Image { description, .. } | MomentContent::Video { description, .. } => {
                if let Some(new) = &patch.description {
                    *description = new.clone();
                }
            }
            MomentContent::Stat { readout, rating } => {
                if let Some(new) = &patch.body {
                    *readout = new.clone();
                }
                if let Some(new) = patch.rating {
                    *rating = Some(new);
                }
            }
            MomentContent::Note { text } | MomentContent::Quote { text } => {
                if let Some(new) = &patch.body {
                    *text = new.clone();
                }
            }
            MomentContent::Link { note, .. } => {
                if let Some(new) = &patch.body {
                    *note = new.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn note(text: &str) -> Moment {
        Moment::new(
            MomentContent::Note {
                text: text.to_string(),
            },
            day(2023, 8, 12),
        )
        .with_caption("Pact Sealed")
    }

    mod kind {
        use super::*;

        #[test]
        fn round_trips_through_strings() {
            for kind in MomentKind::ALL {
                assert_eq!(kind.as_str().parse::<MomentKind>().unwrap(), kind);
            }
        }

        #[test]
        fn rejects_unknown() {
            assert!("gif".parse::<MomentKind>().is_err());
        }

        #[test]
        fn empty_content_has_matching_kind() {
            for kind in MomentKind::ALL {
                assert_eq!(MomentContent::empty(kind).kind(), kind);
            }
        }

        #[test]
        fn visual_kinds() {
            assert!(MomentKind::Image.is_visual());
            assert!(MomentKind::Video.is_visual());
            assert!(!MomentKind::Quote.is_visual());
        }
    }

    mod patching {
        use super::*;

        #[test]
        fn merges_only_supplied_fields() {
            let mut moment = note("The patron demands a soul.");
            moment.apply_patch(&MomentPatch::new().body("Paid in full."));

            assert_eq!(moment.body(), Some("Paid in full."));
            assert_eq!(moment.caption(), "Pact Sealed");
            assert_eq!(moment.date(), day(2023, 8, 12));
        }

        #[test]
        fn empty_patch_changes_nothing() {
            let mut moment = note("unchanged");
            let before = moment.clone();
            moment.apply_patch(&MomentPatch::new());
            assert_eq!(moment, before);
            assert!(MomentPatch::new().is_empty());
        }

        #[test]
        fn description_only_applies_to_visuals() {
            let mut image = Moment::new(
                MomentContent::Image {
                    src: "data:image/png;base64,AAAA".to_string(),
                    description: String::new(),
                },
                day(2024, 1, 15),
            );
            image.apply_patch(&MomentPatch::new().description("Meditation complete.").body("ignored"));
            assert_eq!(image.description(), Some("Meditation complete."));
            assert_eq!(image.body(), None);

            let mut text = note("text");
            text.apply_patch(&MomentPatch::new().description("ignored"));
            assert_eq!(text.description(), None);
        }

        #[test]
        fn stat_takes_rating_and_readout() {
            let mut stat = Moment::new(MomentContent::empty(MomentKind::Stat), day(2023, 9, 1));
            stat.apply_patch(&MomentPatch::new().body("> STR: 20").rating(9));
            assert_eq!(stat.body(), Some("> STR: 20"));
            assert_eq!(stat.rating(), Some(9));
        }

        #[test]
        fn pinning() {
            let mut moment = note("x");
            moment.apply_patch(&MomentPatch::new().pinned(true));
            assert!(moment.is_pinned());
        }
    }

    mod serde_shape {
        use super::*;

        #[test]
        fn type_tag_is_flattened() {
            let moment = note("Hail Sithis.").with_id(MomentId::from_u128(401));
            let json = serde_json::to_value(&moment).unwrap();
            assert_eq!(json["type"], "note");
            assert_eq!(json["text"], "Hail Sithis.");
            assert_eq!(json["caption"], "Pact Sealed");
            assert_eq!(json["isPinned"], false);
        }
    }
}
