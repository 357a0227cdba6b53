//! Library state container.
//!
//! Owns every top-level collection of a session: legends, the game
//! catalog, both manual display orders and the tag catalog, together with
//! the selection and view flags. Each mutation is a plain method, and the
//! same set is reachable through [`LibraryAction`] and
//! [`LibraryState::reduce`] so UI code can dispatch intents.
//!
//! Operations are total: an unknown id is a no-op reported through the
//! return value, never an error.

use legends_domain::{
    DisplayOrder, FocalPoint, Game, GameId, Legend, LegendId, LegendName, Moment, MomentId,
    MomentPatch, TagCatalog,
};

use super::reorder::ReorderSession;

/// Which collection the library shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LibraryView {
    #[default]
    Legends,
    Games,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

/// Everything needed to create a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLegend {
    pub name: LegendName,
    pub game: String,
    pub visage: Option<String>,
    pub image_position: FocalPoint,
    pub color: String,
}

/// A user intent against the library.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryAction {
    CreateLegend(NewLegend),
    AddMoment {
        legend_id: LegendId,
        moment: Moment,
    },
    UpdateMoment {
        legend_id: LegendId,
        moment_id: MomentId,
        patch: MomentPatch,
    },
    DeleteMoment(MomentId),
    UpdateLegend(Box<Legend>),
    DeleteLegend(LegendId),
    DeleteTag(String),
    AddGame(Game),
    FilterByGame(Option<GameId>),
    GoHome,
    OpenLegend(LegendId),
    CloseLegend,
    ViewMoment {
        legend_id: LegendId,
        moment_id: MomentId,
    },
    CloseMoment,
    SetView(LibraryView),
    SetLayout(Layout),
    SetReorderMode(bool),
    BeginDrag(usize),
    DragOver(usize),
    EndDrag,
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Unchanged,
    Changed,
    LegendCreated(LegendId),
    MomentAdded(MomentId),
}

impl ActionOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryState {
    legends: Vec<Legend>,
    games: Vec<Game>,
    legend_order: DisplayOrder<LegendId>,
    game_order: DisplayOrder<GameId>,
    tags: TagCatalog,
    selected_legend: Option<LegendId>,
    viewing_moment: Option<(LegendId, MomentId)>,
    view: LibraryView,
    layout: Layout,
    reorder_mode: bool,
    active_game: Option<GameId>,
    reorder: ReorderSession,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl LibraryState {
    /// A library over `legends` and `games` with empty display orders and
    /// the default tag catalog.
    pub fn new(legends: Vec<Legend>, games: Vec<Game>) -> Self {
        Self {
            legends,
            games,
            legend_order: DisplayOrder::new(),
            game_order: DisplayOrder::new(),
            tags: TagCatalog::with_defaults(),
            selected_legend: None,
            viewing_moment: None,
            view: LibraryView::default(),
            layout: Layout::default(),
            reorder_mode: false,
            active_game: None,
            reorder: ReorderSession::new(),
        }
    }

    /// The starter session: seed legends and catalog, orders initialised.
    pub fn seeded() -> Self {
        let mut state = Self::new(super::seed::legends(), super::seed::games());
        state.initialize_orders();
        state
    }

    pub fn with_tags(mut self, tags: TagCatalog) -> Self {
        self.tags = tags;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn legend(&self, id: LegendId) -> Option<&Legend> {
        self.legends.iter().find(|l| l.id() == id)
    }

    pub fn game(&self, id: &GameId) -> Option<&Game> {
        self.games.iter().find(|g| &g.id == id)
    }

    pub fn legend_order(&self) -> &DisplayOrder<LegendId> {
        &self.legend_order
    }

    pub fn game_order(&self) -> &DisplayOrder<GameId> {
        &self.game_order
    }

    pub fn tags(&self) -> &TagCatalog {
        &self.tags
    }

    pub fn selected_legend_id(&self) -> Option<LegendId> {
        self.selected_legend
    }

    /// The legend open in detail view, read live from the collection.
    pub fn selected_legend(&self) -> Option<&Legend> {
        self.selected_legend.and_then(|id| self.legend(id))
    }

    /// The moment open in the viewer and the legend that owns it.
    pub fn viewing_moment(&self) -> Option<(&Legend, &Moment)> {
        let (legend_id, moment_id) = self.viewing_moment?;
        let legend = self.legend(legend_id)?;
        let moment = legend.moment(moment_id)?;
        Some((legend, moment))
    }

    pub fn view(&self) -> LibraryView {
        self.view
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn reorder_mode(&self) -> bool {
        self.reorder_mode
    }

    pub fn active_game(&self) -> Option<&Game> {
        self.active_game.as_ref().and_then(|id| self.game(id))
    }

    pub fn reorder_session(&self) -> ReorderSession {
        self.reorder
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Legends to display: filtered by the active game, then in manual order.
    ///
    /// A filter naming a game that is not in the catalog matches nothing.
    pub fn displayed_legends(&self) -> Vec<&Legend> {
        let filtered: Vec<&Legend> = match &self.active_game {
            None => self.legends.iter().collect(),
            Some(id) => match self.game(id) {
                Some(game) => self
                    .legends
                    .iter()
                    .filter(|l| l.game() == game.name)
                    .collect(),
                None => Vec::new(),
            },
        };
        self.legend_order.sorted(filtered, |l| l.id())
    }

    /// Games to display, in manual order.
    pub fn displayed_games(&self) -> Vec<&Game> {
        self.game_order.sorted(self.games.iter(), |g| g.id.clone())
    }

    /// Number of legends tied to the game named `name`.
    pub fn legend_count_for(&self, name: &str) -> usize {
        self.legends.iter().filter(|l| l.game() == name).count()
    }

    // =========================================================================
    // Order lists
    // =========================================================================

    /// Seed empty order lists from the current collections.
    pub fn initialize_orders(&mut self) {
        self.legend_order
            .seed_if_empty(self.legends.iter().map(Legend::id));
        self.game_order
            .seed_if_empty(self.games.iter().map(|g| g.id.clone()));
    }

    pub fn begin_drag(&mut self, index: usize) {
        self.reorder.begin(index);
    }

    /// Move the dragged item over `target` in whichever list is displayed.
    ///
    /// Returns whether the persisted order changed.
    pub fn drag_over(&mut self, target: usize) -> bool {
        match self.view {
            LibraryView::Legends => {
                let displayed: Vec<LegendId> =
                    self.displayed_legends().iter().map(|l| l.id()).collect();
                let Some(reordered) = self.reorder.hover(target, &displayed) else {
                    return false;
                };
                self.legend_order.splice_visible(&reordered);
            }
            LibraryView::Games => {
                let displayed: Vec<GameId> = self
                    .displayed_games()
                    .iter()
                    .map(|g| g.id.clone())
                    .collect();
                let Some(reordered) = self.reorder.hover(target, &displayed) else {
                    return false;
                };
                self.game_order.splice_visible(&reordered);
            }
        }
        tracing::debug!(target, view = ?self.view, "Display order updated");
        true
    }

    pub fn end_drag(&mut self) {
        self.reorder.end();
    }

    // =========================================================================
    // Legend operations
    // =========================================================================

    /// Create a legend at the front of the collection and the order.
    pub fn create_legend(&mut self, new: NewLegend) -> LegendId {
        let legend = Legend::new(new.name, new.game)
            .with_visage(new.visage)
            .with_image_position(new.image_position)
            .with_color(new.color);
        let id = legend.id();

        tracing::info!(legend_id = %id, name = %legend.name(), "Legend created");
        self.legends.insert(0, legend);
        self.legend_order.prepend(id);
        id
    }

    /// Replace the legend with the same id and merge its tags into the
    /// catalog. The legend becomes the selection.
    pub fn update_legend(&mut self, legend: Legend) -> bool {
        let id = legend.id();
        let Some(slot) = self.legends.iter_mut().find(|l| l.id() == id) else {
            return false;
        };

        let added = self.tags.merge(legend.tags().iter().map(String::as_str));
        if !added.is_empty() {
            tracing::debug!(?added, "Tag catalog extended");
        }
        *slot = legend;
        self.selected_legend = Some(id);
        true
    }

    /// Remove a legend from the collection and the order. Clears the
    /// selection whether or not the legend existed.
    pub fn delete_legend(&mut self, id: LegendId) -> bool {
        let before = self.legends.len();
        self.legends.retain(|l| l.id() != id);
        let removed = self.legends.len() != before;

        self.legend_order.remove(&id);
        self.selected_legend = None;
        if matches!(self.viewing_moment, Some((legend_id, _)) if legend_id == id) {
            self.viewing_moment = None;
        }
        if removed {
            tracing::info!(legend_id = %id, "Legend deleted");
        }
        removed
    }

    pub fn open_legend(&mut self, id: LegendId) -> bool {
        if self.legend(id).is_none() {
            return false;
        }
        self.selected_legend = Some(id);
        true
    }

    pub fn close_legend(&mut self) {
        self.selected_legend = None;
    }

    // =========================================================================
    // Moment operations
    // =========================================================================

    /// Prepend `moment` to a legend's journal and open it in the viewer.
    pub fn add_moment(&mut self, legend_id: LegendId, moment: Moment) -> Option<MomentId> {
        let legend = self.legends.iter_mut().find(|l| l.id() == legend_id)?;
        let moment_id = moment.id();

        tracing::info!(%legend_id, %moment_id, kind = %moment.kind(), "Moment inscribed");
        legend.prepend_moment(moment);
        self.viewing_moment = Some((legend_id, moment_id));
        Some(moment_id)
    }

    /// Merge `patch` into a moment. Fields the patch leaves out keep their
    /// values.
    pub fn update_moment(
        &mut self,
        legend_id: LegendId,
        moment_id: MomentId,
        patch: &MomentPatch,
    ) -> bool {
        self.legends
            .iter_mut()
            .find(|l| l.id() == legend_id)
            .is_some_and(|legend| legend.update_moment(moment_id, patch))
    }

    /// Delete a moment from the open legend. Without an open legend this
    /// does nothing.
    pub fn delete_moment(&mut self, moment_id: MomentId) -> bool {
        let Some(legend_id) = self.selected_legend else {
            tracing::debug!(%moment_id, "Delete ignored: no legend open");
            return false;
        };
        let removed = self
            .legends
            .iter_mut()
            .find(|l| l.id() == legend_id)
            .is_some_and(|legend| legend.remove_moment(moment_id));

        if removed && matches!(self.viewing_moment, Some((_, id)) if id == moment_id) {
            self.viewing_moment = None;
        }
        removed
    }

    pub fn view_moment(&mut self, legend_id: LegendId, moment_id: MomentId) -> bool {
        let exists = self
            .legend(legend_id)
            .is_some_and(|l| l.moment(moment_id).is_some());
        if exists {
            self.viewing_moment = Some((legend_id, moment_id));
        }
        exists
    }

    pub fn close_moment(&mut self) {
        self.viewing_moment = None;
    }

    // =========================================================================
    // Catalogs
    // =========================================================================

    /// Remove a tag from the catalog only. Legends keep their tags.
    pub fn delete_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Add a game unless one with the same id exists.
    pub fn add_game(&mut self, game: Game) -> bool {
        if self.game(&game.id).is_some() {
            return false;
        }
        tracing::info!(game_id = %game.id, name = %game.name, "Game added to catalog");
        self.games.push(game);
        true
    }

    // =========================================================================
    // Navigation and view flags
    // =========================================================================

    /// Filter the library to one game (or none) and show legends.
    pub fn filter_by_game(&mut self, game: Option<GameId>) {
        self.active_game = game;
        self.view = LibraryView::Legends;
    }

    /// Back to the unfiltered legend library with nothing open.
    pub fn go_home(&mut self) {
        self.view = LibraryView::Legends;
        self.active_game = None;
        self.selected_legend = None;
    }

    pub fn set_view(&mut self, view: LibraryView) {
        self.view = view;
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn set_reorder_mode(&mut self, enabled: bool) {
        self.reorder_mode = enabled;
        if !enabled {
            self.reorder.end();
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub fn reduce(&mut self, action: LibraryAction) -> ActionOutcome {
        match action {
            LibraryAction::CreateLegend(new) => ActionOutcome::LegendCreated(self.create_legend(new)),
            LibraryAction::AddMoment { legend_id, moment } => self
                .add_moment(legend_id, moment)
                .map_or(ActionOutcome::Unchanged, ActionOutcome::MomentAdded),
            LibraryAction::UpdateMoment {
                legend_id,
                moment_id,
                patch,
            } => ActionOutcome::from_changed(self.update_moment(legend_id, moment_id, &patch)),
            LibraryAction::DeleteMoment(moment_id) => {
                ActionOutcome::from_changed(self.delete_moment(moment_id))
            }
            LibraryAction::UpdateLegend(legend) => {
                ActionOutcome::from_changed(self.update_legend(*legend))
            }
            LibraryAction::DeleteLegend(id) => ActionOutcome::from_changed(self.delete_legend(id)),
            LibraryAction::DeleteTag(tag) => ActionOutcome::from_changed(self.delete_tag(&tag)),
            LibraryAction::AddGame(game) => ActionOutcome::from_changed(self.add_game(game)),
            LibraryAction::FilterByGame(game) => {
                self.filter_by_game(game);
                ActionOutcome::Changed
            }
            LibraryAction::GoHome => {
                self.go_home();
                ActionOutcome::Changed
            }
            LibraryAction::OpenLegend(id) => ActionOutcome::from_changed(self.open_legend(id)),
            LibraryAction::CloseLegend => {
                self.close_legend();
                ActionOutcome::Changed
            }
            LibraryAction::ViewMoment {
                legend_id,
                moment_id,
            } => ActionOutcome::from_changed(self.view_moment(legend_id, moment_id)),
            LibraryAction::CloseMoment => {
                self.close_moment();
                ActionOutcome::Changed
            }
            LibraryAction::SetView(view) => {
                self.set_view(view);
                ActionOutcome::Changed
            }
            LibraryAction::SetLayout(layout) => {
                self.set_layout(layout);
                ActionOutcome::Changed
            }
            LibraryAction::SetReorderMode(enabled) => {
                self.set_reorder_mode(enabled);
                ActionOutcome::Changed
            }
            LibraryAction::BeginDrag(index) => {
                self.begin_drag(index);
                ActionOutcome::Changed
            }
            LibraryAction::DragOver(target) => ActionOutcome::from_changed(self.drag_over(target)),
            LibraryAction::EndDrag => {
                self.end_drag();
                ActionOutcome::Changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use legends_domain::MomentContent;

    fn legend(id: u128, name: &str, game: &str) -> Legend {
        Legend::new(LegendName::new(name).unwrap(), game).with_id(LegendId::from_u128(id))
    }

    fn note(id: u128, text: &str) -> Moment {
        Moment::new(
            MomentContent::Note { text: text.into() },
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_id(MomentId::from_u128(id))
    }

    fn library() -> LibraryState {
        let mut state = LibraryState::new(
            vec![
                legend(1, "Haldor", "Baldur's Gate 3"),
                legend(2, "Unthur", "Skyrim"),
                legend(3, "Durge", "Baldur's Gate 3"),
            ],
            vec![
                Game::new("bg3", "Baldur's Gate 3", "bg-red-900"),
                Game::new("skyrim", "Skyrim", "bg-slate-700"),
            ],
        );
        state.initialize_orders();
        state
    }

    fn new_legend(name: &str) -> NewLegend {
        NewLegend {
            name: LegendName::new(name).unwrap(),
            game: "Skyrim".into(),
            visage: None,
            image_position: FocalPoint::CENTER,
            color: "bg-gray-800".into(),
        }
    }

    fn displayed_names(state: &LibraryState) -> Vec<String> {
        state
            .displayed_legends()
            .iter()
            .map(|l| l.name().to_string())
            .collect()
    }

    mod legends {
        use super::*;

        #[test]
        fn create_prepends_to_collection_and_order() {
            let mut state = library();

            let id = state.create_legend(new_legend("Lae'zel"));

            assert_eq!(state.legends()[0].id(), id);
            assert_eq!(state.legend_order().ids()[0], id);
            assert_eq!(state.displayed_legends()[0].id(), id);
        }

        #[test]
        fn created_legend_has_empty_collections() {
            let mut state = library();

            let id = state.create_legend(new_legend("Karlach"));
            let created = state.legend(id).unwrap();

            assert!(created.moments().is_empty());
            assert!(created.tags().is_empty());
            assert!(created.gallery().is_empty());
        }

        #[test]
        fn delete_removes_from_collection_order_and_selection() {
            let mut state = library();
            let id = LegendId::from_u128(2);
            state.open_legend(id);

            assert!(state.delete_legend(id));
            assert!(state.legend(id).is_none());
            assert!(!state.legend_order().contains(&id));
            assert!(state.selected_legend().is_none());
            assert!(state.displayed_legends().iter().all(|l| l.id() != id));
        }

        #[test]
        fn delete_unknown_legend_still_clears_selection() {
            let mut state = library();
            state.open_legend(LegendId::from_u128(1));

            assert!(!state.delete_legend(LegendId::from_u128(99)));
            assert!(state.selected_legend().is_none());
        }

        #[test]
        fn update_replaces_record_and_merges_new_tags() {
            let mut state = library();
            let updated = state
                .legend(LegendId::from_u128(1))
                .unwrap()
                .clone()
                .with_epitaph("Bound by a pact")
                .with_tags(["Warlock", "Tank"]);

            assert!(state.update_legend(updated));

            let stored = state.legend(LegendId::from_u128(1)).unwrap();
            assert_eq!(stored.epitaph(), "Bound by a pact");
            assert!(state.tags().contains("Warlock"));
            assert!(state.tags().contains("Tank"));
            assert_eq!(state.selected_legend_id(), Some(LegendId::from_u128(1)));
        }

        #[test]
        fn update_of_unknown_legend_is_a_no_op() {
            let mut state = library();
            let stranger = legend(42, "Nobody", "Skyrim");

            assert!(!state.update_legend(stranger));
            assert_eq!(state.legends().len(), 3);
        }
    }

    mod moments {
        use super::*;

        #[test]
        fn add_prepends_and_open_copy_reflects_it() {
            let mut state = library();
            let id = LegendId::from_u128(1);
            state.open_legend(id);
            state.add_moment(id, note(10, "older"));

            let added = state.add_moment(id, note(11, "newer"));

            assert_eq!(added, Some(MomentId::from_u128(11)));
            let open = state.selected_legend().unwrap();
            assert_eq!(open.moments()[0].id(), MomentId::from_u128(11));
            assert_eq!(open.moments().len(), 2);
        }

        #[test]
        fn add_opens_the_new_moment_in_the_viewer() {
            let mut state = library();
            let id = LegendId::from_u128(2);

            state.add_moment(id, note(12, "hail"));

            let (owner, moment) = state.viewing_moment().unwrap();
            assert_eq!(owner.id(), id);
            assert_eq!(moment.body(), Some("hail"));
        }

        #[test]
        fn add_to_unknown_legend_does_nothing() {
            let mut state = library();

            assert_eq!(state.add_moment(LegendId::from_u128(9), note(1, "x")), None);
            assert!(state.viewing_moment().is_none());
        }

        #[test]
        fn update_merges_only_supplied_fields() {
            let mut state = library();
            let legend_id = LegendId::from_u128(1);
            state.add_moment(legend_id, note(20, "original").with_caption("Title"));

            let patch = MomentPatch::new().body("rewritten");
            assert!(state.update_moment(legend_id, MomentId::from_u128(20), &patch));

            let moment = state
                .legend(legend_id)
                .unwrap()
                .moment(MomentId::from_u128(20))
                .unwrap();
            assert_eq!(moment.body(), Some("rewritten"));
            assert_eq!(moment.caption(), "Title");
        }

        #[test]
        fn delete_requires_an_open_legend() {
            let mut state = library();
            let legend_id = LegendId::from_u128(1);
            state.add_moment(legend_id, note(30, "keep"));

            assert!(!state.delete_moment(MomentId::from_u128(30)));

            state.open_legend(legend_id);
            assert!(state.delete_moment(MomentId::from_u128(30)));
            assert!(state.viewing_moment().is_none());
        }

        #[test]
        fn delete_only_touches_the_open_legend() {
            let mut state = library();
            state.add_moment(LegendId::from_u128(2), note(31, "elsewhere"));
            state.open_legend(LegendId::from_u128(1));

            assert!(!state.delete_moment(MomentId::from_u128(31)));
        }
    }

    mod catalogs {
        use super::*;

        #[test]
        fn deleting_a_tag_leaves_legend_tags_alone() {
            let mut state = library();
            let tanky = state
                .legend(LegendId::from_u128(1))
                .unwrap()
                .clone()
                .with_tags(["Tank"]);
            state.update_legend(tanky);

            assert!(state.delete_tag("Tank"));

            assert!(!state.tags().contains("Tank"));
            assert!(state.legend(LegendId::from_u128(1)).unwrap().has_tag("Tank"));
        }

        #[test]
        fn add_game_rejects_duplicate_ids() {
            let mut state = library();

            assert!(!state.add_game(Game::new("bg3", "Other", "bg-black")));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn legends_follow_manual_order() {
            let mut state = library();
            state.legend_order = DisplayOrder::from_ids([3u128, 1, 2].map(LegendId::from_u128));

            assert_eq!(displayed_names(&state), ["Durge", "Haldor", "Unthur"]);
        }

        #[test]
        fn unordered_legends_sort_last() {
            let mut state = library();
            state.legend_order = DisplayOrder::from_ids([LegendId::from_u128(2)]);

            assert_eq!(displayed_names(&state), ["Unthur", "Haldor", "Durge"]);
        }

        #[test]
        fn game_filter_matches_game_name() {
            let mut state = library();
            state.set_view(LibraryView::Games);

            state.filter_by_game(Some(GameId::new("bg3")));

            assert_eq!(state.view(), LibraryView::Legends);
            assert_eq!(displayed_names(&state), ["Haldor", "Durge"]);
        }

        #[test]
        fn filter_on_missing_game_shows_nothing() {
            let mut state = library();

            state.filter_by_game(Some(GameId::new("gone")));

            assert!(state.displayed_legends().is_empty());
        }

        #[test]
        fn go_home_clears_filter_view_and_selection() {
            let mut state = library();
            state.filter_by_game(Some(GameId::new("bg3")));
            state.open_legend(LegendId::from_u128(1));
            state.set_view(LibraryView::Games);

            state.go_home();

            assert_eq!(state.view(), LibraryView::Legends);
            assert!(state.active_game().is_none());
            assert!(state.selected_legend().is_none());
        }

        #[test]
        fn initialize_orders_keeps_existing_order() {
            let mut state = library();
            state.legend_order = DisplayOrder::from_ids([LegendId::from_u128(3)]);

            state.initialize_orders();

            assert_eq!(state.legend_order().ids(), &[LegendId::from_u128(3)]);
        }
    }

    mod reordering {
        use super::*;

        #[test]
        fn dragging_rewrites_legend_order() {
            let mut state = library();
            state.begin_drag(0);

            assert!(state.drag_over(2));
            state.end_drag();

            assert_eq!(displayed_names(&state), ["Unthur", "Durge", "Haldor"]);
        }

        #[test]
        fn filtered_drag_keeps_hidden_slots() {
            let mut state = library();
            state.filter_by_game(Some(GameId::new("bg3")));
            state.begin_drag(1);

            assert!(state.drag_over(0));

            let order: Vec<u128> = state
                .legend_order()
                .ids()
                .iter()
                .map(|id| id.as_uuid().as_u128())
                .collect();
            assert_eq!(order, vec![3, 2, 1]);
        }

        #[test]
        fn dragging_games_rewrites_game_order() {
            let mut state = library();
            state.set_view(LibraryView::Games);
            state.begin_drag(1);

            assert!(state.drag_over(0));

            let names: Vec<&str> = state
                .displayed_games()
                .iter()
                .map(|g| g.name.as_str())
                .collect();
            assert_eq!(names, ["Skyrim", "Baldur's Gate 3"]);
        }

        #[test]
        fn leaving_reorder_mode_ends_the_drag() {
            let mut state = library();
            state.set_reorder_mode(true);
            state.begin_drag(0);

            state.set_reorder_mode(false);

            assert!(!state.reorder_session().is_active());
            assert!(!state.drag_over(1));
        }
    }

    mod dispatch {
        use super::*;

        #[test]
        fn create_reports_new_id() {
            let mut state = library();

            let outcome = state.reduce(LibraryAction::CreateLegend(new_legend("Astarion")));

            let ActionOutcome::LegendCreated(id) = outcome else {
                panic!("unexpected outcome: {outcome:?}");
            };
            assert_eq!(state.legends()[0].id(), id);
        }

        #[test]
        fn missing_ids_report_unchanged() {
            let mut state = library();

            let outcome = state.reduce(LibraryAction::OpenLegend(LegendId::from_u128(77)));

            assert_eq!(outcome, ActionOutcome::Unchanged);
            assert!(!outcome.is_changed());
        }
    }
}
