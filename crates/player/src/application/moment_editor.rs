//! Moment viewer editing with debounced autosave.
//!
//! The viewer edits a local copy of caption, body and description. Each
//! keystroke schedules a save through a [`Debouncer`]; when the quiet
//! period elapses the UI asks [`MomentEditor::pending_patch`] for the
//! fields that changed and dispatches them as a merge.

use legends_domain::{LegendId, Moment, MomentId, MomentKind, MomentPatch};

use crate::ports::outbound::ShareRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Fields {
    caption: String,
    body: String,
    description: String,
}

impl Fields {
    fn of(moment: &Moment) -> Self {
        Self {
            caption: moment.caption().to_string(),
            body: moment.body().unwrap_or_default().to_string(),
            description: moment.description().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomentEditor {
    legend_id: LegendId,
    moment_id: MomentId,
    kind: MomentKind,
    edited: Fields,
    saved: Fields,
}

impl MomentEditor {
    pub fn new(legend_id: LegendId, moment: &Moment) -> Self {
        let fields = Fields::of(moment);
        Self {
            legend_id,
            moment_id: moment.id(),
            kind: moment.kind(),
            edited: fields.clone(),
            saved: fields,
        }
    }

    pub fn legend_id(&self) -> LegendId {
        self.legend_id
    }

    pub fn moment_id(&self) -> MomentId {
        self.moment_id
    }

    pub fn kind(&self) -> MomentKind {
        self.kind
    }

    pub fn caption(&self) -> &str {
        &self.edited.caption
    }

    pub fn body(&self) -> &str {
        &self.edited.body
    }

    pub fn description(&self) -> &str {
        &self.edited.description
    }

    /// Stat blocks are generated readouts and are never autosaved.
    pub fn is_editable(&self) -> bool {
        self.kind != MomentKind::Stat
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.edited.caption = caption.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.edited.body = body.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.edited.description = description.into();
    }

    pub fn is_dirty(&self) -> bool {
        self.edited != self.saved
    }

    /// The changed fields, or `None` when nothing needs saving.
    pub fn pending_patch(&self) -> Option<MomentPatch> {
        if !self.is_editable() || !self.is_dirty() {
            return None;
        }

        let mut patch = MomentPatch::new();
        if self.edited.caption != self.saved.caption {
            patch = patch.caption(self.edited.caption.clone());
        }
        if self.edited.body != self.saved.body {
            patch = patch.body(self.edited.body.clone());
        }
        if self.edited.description != self.saved.description {
            patch = patch.description(self.edited.description.clone());
        }
        Some(patch)
    }

    /// Record the current edits as persisted.
    pub fn mark_saved(&mut self) {
        self.saved = self.edited.clone();
    }

    /// Text placed on the clipboard by the copy action.
    pub fn copy_text(&self) -> &str {
        &self.edited.body
    }

    /// Share sheet payload for the moment as currently edited.
    pub fn share_request(&self) -> ShareRequest {
        let title = if self.edited.caption.trim().is_empty() {
            format!("A {} moment", self.kind)
        } else {
            self.edited.caption.clone()
        };
        ShareRequest {
            title,
            text: self.edited.body.clone(),
            url: None,
        }
    }
}

/// Ticket handed out by [`Debouncer::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce driven by a generation counter.
///
/// Every [`schedule`](Self::schedule) supersedes earlier tickets. A task
/// that wakes up after the delay acts only if its ticket is still current,
/// and [`cancel`](Self::cancel) on teardown invalidates any in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        DebounceTicket(self.generation)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use legends_domain::MomentContent;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 12).unwrap()
    }

    fn note() -> Moment {
        Moment::new(
            MomentContent::Note {
                text: "The patron demands a soul.".into(),
            },
            date(),
        )
        .with_caption("Pact Sealed")
    }

    fn editor_for(moment: &Moment) -> MomentEditor {
        MomentEditor::new(LegendId::from_u128(1), moment)
    }

    mod autosave {
        use super::*;

        #[test]
        fn untouched_editor_has_nothing_to_save() {
            let editor = editor_for(&note());

            assert!(!editor.is_dirty());
            assert_eq!(editor.pending_patch(), None);
        }

        #[test]
        fn patch_contains_only_changed_fields() {
            let mut editor = editor_for(&note());
            editor.set_body("I gave them mine long ago.");

            let patch = editor.pending_patch().unwrap();

            assert_eq!(patch, MomentPatch::new().body("I gave them mine long ago."));
        }

        #[test]
        fn patch_applies_as_a_merge() {
            let mut moment = note();
            let mut editor = editor_for(&moment);
            editor.set_caption("Pact Broken");

            moment.apply_patch(&editor.pending_patch().unwrap());

            assert_eq!(moment.caption(), "Pact Broken");
            assert_eq!(moment.body(), Some("The patron demands a soul."));
        }

        #[test]
        fn mark_saved_clears_dirty_state() {
            let mut editor = editor_for(&note());
            editor.set_caption("New");

            editor.mark_saved();

            assert!(editor.pending_patch().is_none());
        }

        #[test]
        fn editing_back_to_saved_value_is_clean() {
            let mut editor = editor_for(&note());
            editor.set_caption("Other");
            editor.set_caption("Pact Sealed");

            assert!(!editor.is_dirty());
        }

        #[test]
        fn share_uses_edited_caption_and_body() {
            let mut editor = editor_for(&note());
            editor.set_caption("Pact Renewed");

            let request = editor.share_request();

            assert_eq!(request.title, "Pact Renewed");
            assert_eq!(request.text, "The patron demands a soul.");
            assert_eq!(request.url, None);
        }

        #[test]
        fn share_without_caption_names_the_kind() {
            let mut editor = editor_for(&note());
            editor.set_caption("  ");

            assert_eq!(editor.share_request().title, "A note moment");
        }

        #[test]
        fn stat_blocks_are_never_saved() {
            let stat = Moment::new(
                MomentContent::Stat {
                    readout: "> STR: 20".into(),
                    rating: Some(9),
                },
                date(),
            );
            let mut editor = editor_for(&stat);
            editor.set_body("> STR: 99");

            assert!(!editor.is_editable());
            assert_eq!(editor.pending_patch(), None);
        }

        #[test]
        fn image_description_is_editable() {
            let image = Moment::new(
                MomentContent::Image {
                    src: "https://example.com/a.png".into(),
                    description: String::new(),
                },
                date(),
            );
            let mut editor = editor_for(&image);
            editor.set_description("Meditation complete.");

            assert_eq!(
                editor.pending_patch(),
                Some(MomentPatch::new().description("Meditation complete."))
            );
        }
    }

    mod debounce {
        use super::*;

        #[test]
        fn latest_ticket_is_current() {
            let mut debouncer = Debouncer::new();
            let first = debouncer.schedule();
            let second = debouncer.schedule();

            assert!(!debouncer.is_current(first));
            assert!(debouncer.is_current(second));
        }

        #[test]
        fn cancel_invalidates_pending_ticket() {
            let mut debouncer = Debouncer::new();
            let ticket = debouncer.schedule();

            debouncer.cancel();

            assert!(!debouncer.is_current(ticket));
        }
    }
}
