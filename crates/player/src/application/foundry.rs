//! Foundry modal: logging a new moment against a legend.
//!
//! `TypeSelect -> Editor -> submitted`. Choosing a visual type asks the UI
//! to open the file picker straight away.

use chrono::NaiveDate;

use legends_domain::common::trimmed_non_empty;
use legends_domain::{DomainError, Legend, LegendId, Moment, MomentContent, MomentKind};

/// Caption given to every stat block.
pub const STAT_CAPTION: &str = "SYSTEM DIAGNOSTIC";

/// Rating synthesised for stat blocks.
pub const STAT_RATING: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoundryStep {
    #[default]
    TypeSelect,
    Editor,
}

/// Side effect the UI should perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundryEffect {
    None,
    OpenFilePicker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundryModal {
    step: FoundryStep,
    target: Option<LegendId>,
    kind: MomentKind,
    caption: String,
    content: String,
}

impl FoundryModal {
    /// Open the modal.
    ///
    /// Without an explicit target the first legend is used. An initial
    /// type skips type selection.
    pub fn open(
        legends: &[Legend],
        target: Option<LegendId>,
        initial_kind: Option<MomentKind>,
    ) -> (Self, FoundryEffect) {
        let mut modal = Self {
            step: FoundryStep::TypeSelect,
            target: target.or_else(|| legends.first().map(Legend::id)),
            kind: MomentKind::Image,
            caption: String::new(),
            content: String::new(),
        };
        let effect = match initial_kind {
            Some(kind) => modal.select_type(kind),
            None => FoundryEffect::None,
        };
        (modal, effect)
    }

    pub fn step(&self) -> FoundryStep {
        self.step
    }

    pub fn target(&self) -> Option<LegendId> {
        self.target
    }

    pub fn kind(&self) -> MomentKind {
        self.kind
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Pick the moment type and move to the editor.
    pub fn select_type(&mut self, kind: MomentKind) -> FoundryEffect {
        self.kind = kind;
        self.step = FoundryStep::Editor;
        tracing::debug!(%kind, "Foundry type selected");
        if kind.is_visual() {
            FoundryEffect::OpenFilePicker
        } else {
            FoundryEffect::None
        }
    }

    /// Return to type selection, discarding typed content.
    pub fn back(&mut self) {
        self.step = FoundryStep::TypeSelect;
        self.content.clear();
    }

    pub fn set_target(&mut self, target: LegendId) {
        self.target = Some(target);
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Free text, or a data URL for visual types.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Whether the type is exempt from the content requirement.
    fn content_optional(&self) -> bool {
        matches!(
            self.kind,
            MomentKind::Image | MomentKind::Video | MomentKind::Stat | MomentKind::Note
        )
    }

    pub fn can_submit(&self) -> bool {
        self.step == FoundryStep::Editor
            && self.target.is_some()
            && (self.content_optional() || !self.content.is_empty())
    }

    /// Build the moment to add and the legend it belongs to.
    pub fn submit(&self, today: NaiveDate) -> Result<(LegendId, Moment), DomainError> {
        if self.step != FoundryStep::Editor {
            return Err(DomainError::invalid_state_transition(
                "choose a moment type before inscribing",
            ));
        }
        let target = self
            .target
            .ok_or_else(|| DomainError::validation("No legend chosen for this moment"))?;
        if !self.content_optional() && self.content.is_empty() {
            return Err(DomainError::validation(format!(
                "A {} moment needs content",
                self.kind
            )));
        }

        let content = self.content.clone();
        let moment_content = match self.kind {
            MomentKind::Image => MomentContent::Image {
                src: content,
                description: String::new(),
            },
            MomentKind::Video => MomentContent::Video {
                src: content,
                description: String::new(),
            },
            MomentKind::Stat => MomentContent::Stat {
                readout: content,
                rating: Some(STAT_RATING),
            },
            MomentKind::Note => MomentContent::Note { text: content },
            MomentKind::Link => MomentContent::Link {
                url: content.clone(),
                note: content,
            },
            MomentKind::Quote => MomentContent::Quote { text: content },
        };

        let caption = match self.kind {
            MomentKind::Stat => STAT_CAPTION.to_string(),
            _ => trimmed_non_empty(&self.caption)
                .unwrap_or_default()
                .to_string(),
        };

        Ok((target, Moment::new(moment_content, today).with_caption(caption)))
    }
}
