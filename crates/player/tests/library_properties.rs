//! Library invariants exercised through the public reducer.

use chrono::NaiveDate;
use legends_domain::{
    DisplayOrder, FocalPoint, Game, Legend, LegendId, LegendName, Moment, MomentContent,
    MomentId, MomentPatch,
};
use legends_player::application::{
    ActionOutcome, ForgeWizard, LibraryAction, LibraryState, LibraryView, NewLegend,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn legend(id: u128, name: &str, game: &str) -> Legend {
    Legend::new(LegendName::new(name).unwrap(), game).with_id(LegendId::from_u128(id))
}

fn ids(legends: &[&Legend]) -> Vec<LegendId> {
    legends.iter().map(|l| l.id()).collect()
}

fn library() -> LibraryState {
    let mut state = LibraryState::new(
        vec![
            legend(1, "Haldor", "Baldur's Gate 3"),
            legend(2, "Unthur", "Skyrim"),
            legend(3, "Fol Hahn", "Elden Ring"),
            legend(4, "Ashen One", "Elden Ring"),
        ],
        vec![
            Game::new("bg3", "Baldur's Gate 3", "from-red-900 to-black"),
            Game::new("skyrim", "Skyrim", "from-slate-700 to-black"),
            Game::new("elden", "Elden Ring", "from-amber-900 to-black"),
        ],
    );
    state.initialize_orders();
    state
}

fn new_legend(name: &str) -> NewLegend {
    NewLegend {
        name: LegendName::new(name).unwrap(),
        game: "Skyrim".to_string(),
        visage: None,
        image_position: FocalPoint::CENTER,
        color: "from-gray-700 to-gray-900".to_string(),
    }
}

mod ordering {
    use super::*;

    #[test]
    fn unknown_ids_sort_last_and_repeat_deterministically() {
        let order = DisplayOrder::from_ids([LegendId::from_u128(3), LegendId::from_u128(1)]);
        let legends = [
            legend(1, "Haldor", "Baldur's Gate 3"),
            legend(2, "Unthur", "Skyrim"),
            legend(3, "Fol Hahn", "Elden Ring"),
            legend(5, "Stray", "Skyrim"),
        ];

        let first = order.sorted(legends.iter(), |l| l.id());
        let second = order.sorted(legends.iter(), |l| l.id());

        assert_eq!(
            ids(&first),
            vec![
                LegendId::from_u128(3),
                LegendId::from_u128(1),
                LegendId::from_u128(2),
                LegendId::from_u128(5),
            ]
        );
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn drag_moves_one_item_and_keeps_the_rest_in_order() {
        let mut state = library();
        let before = ids(&state.displayed_legends());

        state.reduce(LibraryAction::BeginDrag(0));
        state.reduce(LibraryAction::DragOver(2));
        state.reduce(LibraryAction::EndDrag);

        let mut expected = before.clone();
        let moved = expected.remove(0);
        expected.insert(2, moved);
        assert_eq!(ids(&state.displayed_legends()), expected);
        assert_eq!(state.legend_order().ids(), expected.as_slice());
    }

    #[test]
    fn reorder_within_a_filter_leaves_hidden_legends_in_place() {
        let mut state = library();
        state.reduce(LibraryAction::FilterByGame(Some("elden".into())));
        assert_eq!(
            ids(&state.displayed_legends()),
            vec![LegendId::from_u128(3), LegendId::from_u128(4)]
        );

        state.reduce(LibraryAction::BeginDrag(1));
        state.reduce(LibraryAction::DragOver(0));

        assert_eq!(
            state.legend_order().ids(),
            &[
                LegendId::from_u128(1),
                LegendId::from_u128(2),
                LegendId::from_u128(4),
                LegendId::from_u128(3),
            ]
        );
    }

    #[test]
    fn games_view_reorders_the_game_list() {
        let mut state = library();
        state.reduce(LibraryAction::SetView(LibraryView::Games));

        state.reduce(LibraryAction::BeginDrag(2));
        state.reduce(LibraryAction::DragOver(0));

        let names: Vec<&str> = state
            .displayed_games()
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["Elden Ring", "Baldur's Gate 3", "Skyrim"]);
    }
}

mod legends {
    use super::*;

    #[test]
    fn created_legend_is_first_everywhere() {
        let mut state = library();

        let ActionOutcome::LegendCreated(id) =
            state.reduce(LibraryAction::CreateLegend(new_legend("Mirelurk Queen")))
        else {
            panic!("expected a created legend");
        };

        assert_eq!(state.legends()[0].id(), id);
        assert_eq!(state.legend_order().ids()[0], id);
        assert_eq!(state.displayed_legends()[0].id(), id);
    }

    #[test]
    fn deleted_legend_leaves_collection_and_order() {
        let mut state = library();
        let doomed = LegendId::from_u128(2);

        assert!(state.reduce(LibraryAction::DeleteLegend(doomed)).is_changed());

        assert!(state.legend(doomed).is_none());
        assert!(!state.legend_order().contains(&doomed));
        assert!(!ids(&state.displayed_legends()).contains(&doomed));
    }

    #[test]
    fn deleting_a_catalog_tag_keeps_it_on_legends() {
        let tagged = legend(9, "Shieldwall", "Skyrim").with_tags(["Tank", "Stoic"]);
        let mut state = LibraryState::new(vec![tagged], Vec::new());
        assert!(state.tags().contains("Tank"));

        state.reduce(LibraryAction::DeleteTag("Tank".into()));

        assert!(!state.tags().contains("Tank"));
        let kept = state.legend(LegendId::from_u128(9)).unwrap();
        assert!(kept.has_tag("Tank"));
    }
}

mod moments {
    use super::*;

    fn note(id: u128, text: &str, date: NaiveDate) -> Moment {
        Moment::new(MomentContent::Note { text: text.into() }, date)
            .with_id(MomentId::from_u128(id))
            .with_caption("Day one")
    }

    #[test]
    fn added_moment_is_prepended_and_visible_in_the_open_legend() {
        let mut state = library();
        let id = LegendId::from_u128(1);
        state.reduce(LibraryAction::AddMoment {
            legend_id: id,
            moment: note(10, "Woke in a cart.", day(2024, 1, 1)),
        });
        state.reduce(LibraryAction::OpenLegend(id));

        state.reduce(LibraryAction::AddMoment {
            legend_id: id,
            moment: note(11, "Found the dragon.", day(2024, 1, 2)),
        });

        let open = state.selected_legend().unwrap();
        assert_eq!(open.moments().len(), 2);
        assert_eq!(open.moments()[0].id(), MomentId::from_u128(11));
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut state = library();
        let legend_id = LegendId::from_u128(1);
        let moment_id = MomentId::from_u128(10);
        state.reduce(LibraryAction::AddMoment {
            legend_id,
            moment: note(10, "Woke in a cart.", day(2024, 1, 1)),
        });

        state.reduce(LibraryAction::UpdateMoment {
            legend_id,
            moment_id,
            patch: MomentPatch::new().body("Woke in a cart, again."),
        });

        let moment = state.legend(legend_id).unwrap().moment(moment_id).unwrap();
        assert_eq!(moment.body(), Some("Woke in a cart, again."));
        assert_eq!(moment.caption(), "Day one");
        assert_eq!(moment.date(), day(2024, 1, 1));
    }

    #[test]
    fn moment_for_a_missing_legend_is_ignored() {
        let mut state = library();

        let outcome = state.reduce(LibraryAction::AddMoment {
            legend_id: LegendId::from_u128(99),
            moment: note(10, "Lost.", day(2024, 1, 1)),
        });

        assert_eq!(outcome, ActionOutcome::Unchanged);
    }
}

mod realms {
    use super::*;

    /// Names the realm in a fresh wizard and adds it the way the forge does.
    fn name_realm(state: &mut LibraryState, name: &str) -> (ForgeWizard, Option<Game>) {
        let mut wizard = ForgeWizard::new();
        let added = wizard.name_new_realm(name, state.games()).unwrap();
        if let Some(game) = added.clone() {
            assert!(state.reduce(LibraryAction::AddGame(game)).is_changed());
        }
        (wizard, added)
    }

    #[test]
    fn realm_sharing_a_seeded_slug_joins_the_catalog() {
        let mut state = LibraryState::seeded();
        let before = state.games().len();

        let (wizard, added) = name_realm(&mut state, "WoW");

        let game = added.expect("WoW is not a seeded name");
        assert_ne!(game.id.as_str(), "wow");
        assert_eq!(state.games().len(), before + 1);
        assert_eq!(state.game(&game.id).unwrap().name, "WoW");
        assert_eq!(wizard.realm().unwrap().id.as_ref(), Some(&game.id));
    }

    #[test]
    fn legend_forged_in_a_new_realm_is_found_by_its_filter() {
        let mut state = LibraryState::seeded();
        let (mut wizard, added) = name_realm(&mut state, "LoL");
        let game = added.unwrap();

        wizard.set_name("Teemo Main");
        let new = wizard.begin_forging().unwrap();
        let ActionOutcome::LegendCreated(id) = state.reduce(LibraryAction::CreateLegend(new))
        else {
            panic!("expected a created legend");
        };
        state.reduce(LibraryAction::FilterByGame(Some(game.id)));

        assert_eq!(ids(&state.displayed_legends()), vec![id]);
    }

    #[test]
    fn matching_name_reuses_the_seeded_game() {
        let mut state = LibraryState::seeded();
        let before = state.games().len();

        let (wizard, added) = name_realm(&mut state, "world of warcraft");

        assert!(added.is_none());
        assert_eq!(state.games().len(), before);
        assert_eq!(wizard.realm().unwrap().name, "World of Warcraft");
    }
}
