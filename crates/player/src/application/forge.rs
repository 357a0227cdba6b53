//! Forge wizard: guided creation of a legend.
//!
//! `SelectRealm -> Identity -> Forging`. The UI holds the wizard in a
//! signal, waits out the forging ceremony and then dispatches
//! `LibraryAction::CreateLegend` with the value returned by
//! [`ForgeWizard::begin_forging`].

use std::collections::BTreeSet;

use legends_domain::common::{contains_ignore_case, eq_ignore_case, trimmed_non_empty};
use legends_domain::{
    game_gradient, game_theme_color, DomainError, FocalPoint, Game, GameId, Legend, LegendName,
    DEFAULT_ACCENT,
};

use super::library::NewLegend;

/// Realm used when a legend is forged without choosing one.
pub const UNKNOWN_REALM: &str = "Unknown Realm";

/// Name the fallback cover is themed from.
const UNKNOWN_THEME: &str = "Unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForgeStep {
    #[default]
    SelectRealm,
    Identity,
    Forging,
}

/// A realm the user can pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmChoice {
    pub id: Option<GameId>,
    pub name: String,
    pub cover: String,
    pub image: Option<String>,
}

impl From<&Game> for RealmChoice {
    fn from(game: &Game) -> Self {
        Self {
            id: Some(game.id.clone()),
            name: game.name.clone(),
            cover: game.cover.clone(),
            image: game.image.clone(),
        }
    }
}

impl RealmChoice {
    /// A realm known only by name, themed from the name.
    fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            cover: game_gradient(name),
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForgeWizard {
    step: ForgeStep,
    query: String,
    realm: Option<RealmChoice>,
    name: String,
    portrait: Option<String>,
    focal_point: FocalPoint,
}

impl Default for ForgeWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgeWizard {
    pub fn new() -> Self {
        Self {
            step: ForgeStep::SelectRealm,
            query: String::new(),
            realm: None,
            name: String::new(),
            portrait: None,
            focal_point: FocalPoint::CENTER,
        }
    }

    pub fn step(&self) -> ForgeStep {
        self.step
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn realm(&self) -> Option<&RealmChoice> {
        self.realm.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn portrait(&self) -> Option<&str> {
        self.portrait.as_deref()
    }

    pub fn focal_point(&self) -> FocalPoint {
        self.focal_point
    }

    /// Accent colour of the chosen realm.
    pub fn accent_color(&self) -> &'static str {
        self.realm
            .as_ref()
            .map_or(DEFAULT_ACCENT, |realm| game_theme_color(&realm.name))
    }

    /// Realms on offer: the catalog, or when the catalog is empty, the
    /// distinct game names already used by legends.
    pub fn realm_choices(games: &[Game], legends: &[Legend]) -> Vec<RealmChoice> {
        if !games.is_empty() {
            return games.iter().map(RealmChoice::from).collect();
        }
        let names: BTreeSet<&str> = legends.iter().map(Legend::game).collect();
        names.into_iter().map(RealmChoice::named).collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// [`Self::realm_choices`] narrowed by the search query.
    pub fn filtered_realms(&self, games: &[Game], legends: &[Legend]) -> Vec<RealmChoice> {
        Self::realm_choices(games, legends)
            .into_iter()
            .filter(|realm| contains_ignore_case(&realm.name, self.query.trim()))
            .collect()
    }

    /// Whether the typed query names a realm that is not offered yet.
    pub fn query_is_new_realm(&self, games: &[Game], legends: &[Legend]) -> bool {
        let Some(query) = trimmed_non_empty(&self.query) else {
            return false;
        };
        !Self::realm_choices(games, legends)
            .iter()
            .any(|realm| eq_ignore_case(&realm.name, query))
    }

    /// Choose a realm and advance to naming.
    pub fn select_realm(&mut self, realm: RealmChoice) -> Result<(), DomainError> {
        self.expect_step(ForgeStep::SelectRealm, "select a realm")?;
        tracing::debug!(realm = %realm.name, "Forge realm selected");
        self.realm = Some(realm);
        self.step = ForgeStep::Identity;
        Ok(())
    }

    /// Choose a realm by free-typed name.
    ///
    /// A case-insensitive match against the catalog selects the existing
    /// game. Otherwise a new game with an id unused in `games` is built,
    /// selected and returned so the caller can add it to the catalog.
    pub fn name_new_realm(&mut self, name: &str, games: &[Game]) -> Result<Option<Game>, DomainError> {
        let name = trimmed_non_empty(name)
            .ok_or_else(|| DomainError::validation("Realm name cannot be empty"))?;

        if let Some(existing) = games.iter().find(|g| eq_ignore_case(&g.name, name)) {
            self.select_realm(RealmChoice::from(existing))?;
            return Ok(None);
        }

        let game = Game::new_realm_in(name, games);
        self.select_realm(RealmChoice::from(&game))?;
        Ok(Some(game))
    }

    /// Return to realm selection. Not possible once forging has begun.
    pub fn back(&mut self) -> Result<(), DomainError> {
        if self.step == ForgeStep::Forging {
            return Err(DomainError::invalid_state_transition(
                "cannot go back while forging",
            ));
        }
        self.step = ForgeStep::SelectRealm;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the portrait as a data URL, or clear it.
    pub fn set_portrait(&mut self, portrait: Option<String>) {
        self.portrait = portrait;
        self.focal_point = FocalPoint::CENTER;
    }

    pub fn set_focal_point(&mut self, focal_point: FocalPoint) {
        self.focal_point = focal_point;
    }

    pub fn can_forge(&self) -> bool {
        self.step == ForgeStep::Identity && trimmed_non_empty(&self.name).is_some()
    }

    /// Enter the forging ceremony and produce the legend to create.
    pub fn begin_forging(&mut self) -> Result<NewLegend, DomainError> {
        self.expect_step(ForgeStep::Identity, "forge")?;
        let name = LegendName::new(self.name.as_str())?;

        let (game, color) = match &self.realm {
            Some(realm) => (realm.name.clone(), realm.cover.clone()),
            None => (UNKNOWN_REALM.to_string(), game_gradient(UNKNOWN_THEME)),
        };

        self.step = ForgeStep::Forging;
        tracing::debug!(name = %name, %game, "Forging legend");

        Ok(NewLegend {
            name,
            game,
            visage: self.portrait.clone(),
            image_position: self.focal_point,
            color,
        })
    }

    fn expect_step(&self, expected: ForgeStep, action: &str) -> Result<(), DomainError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(DomainError::invalid_state_transition(format!(
                "cannot {action} from {:?}",
                self.step
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Game> {
        vec![
            Game::new("elden", "Elden Ring", "bg-gradient-to-br from-yellow-700 to-orange-900"),
            Game::new("skyrim", "Skyrim", "bg-gradient-to-br from-slate-700 to-gray-900"),
        ]
    }

    fn legend(name: &str, game: &str) -> Legend {
        Legend::new(LegendName::new(name).unwrap(), game)
    }

    mod realms {
        use super::*;

        #[test]
        fn choices_come_from_catalog() {
            let choices = ForgeWizard::realm_choices(&catalog(), &[]);

            assert_eq!(choices.len(), 2);
            assert_eq!(choices[0].id, Some(GameId::new("elden")));
        }

        #[test]
        fn empty_catalog_falls_back_to_legend_games() {
            let legends = vec![
                legend("A", "Skyrim"),
                legend("B", "Hades"),
                legend("C", "Skyrim"),
            ];

            let names: Vec<String> = ForgeWizard::realm_choices(&[], &legends)
                .into_iter()
                .map(|r| r.name)
                .collect();

            assert_eq!(names, ["Hades", "Skyrim"]);
        }

        #[test]
        fn query_filters_case_insensitively() {
            let mut wizard = ForgeWizard::new();
            wizard.set_query("RING");

            let found = wizard.filtered_realms(&catalog(), &[]);

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].name, "Elden Ring");
        }

        #[test]
        fn detects_new_realm_queries() {
            let mut wizard = ForgeWizard::new();

            wizard.set_query("skyrim");
            assert!(!wizard.query_is_new_realm(&catalog(), &[]));

            wizard.set_query("Hollow Knight");
            assert!(wizard.query_is_new_realm(&catalog(), &[]));
        }

        #[test]
        fn naming_an_existing_realm_reuses_it() {
            let mut wizard = ForgeWizard::new();

            let added = wizard.name_new_realm("  elden ring ", &catalog()).unwrap();

            assert!(added.is_none());
            assert_eq!(wizard.realm().unwrap().id, Some(GameId::new("elden")));
            assert_eq!(wizard.step(), ForgeStep::Identity);
        }

        #[test]
        fn naming_a_new_realm_returns_it() {
            let mut wizard = ForgeWizard::new();

            let added = wizard.name_new_realm("Hollow Knight", &catalog()).unwrap();

            let game = added.unwrap();
            assert_eq!(game.name, "Hollow Knight");
            assert_eq!(wizard.realm().unwrap().name, "Hollow Knight");
        }

        #[test]
        fn blank_realm_name_is_rejected() {
            let mut wizard = ForgeWizard::new();

            let err = wizard.name_new_realm("   ", &catalog()).unwrap_err();

            assert!(matches!(err, DomainError::Validation(_)));
            assert_eq!(wizard.step(), ForgeStep::SelectRealm);
        }
    }

    mod identity {
        use super::*;

        fn at_identity() -> ForgeWizard {
            let mut wizard = ForgeWizard::new();
            wizard
                .select_realm(RealmChoice::from(&catalog()[1]))
                .unwrap();
            wizard
        }

        #[test]
        fn forge_disabled_until_name_present() {
            let mut wizard = at_identity();
            assert!(!wizard.can_forge());

            wizard.set_name("   ");
            assert!(!wizard.can_forge());

            wizard.set_name("Unthur");
            assert!(wizard.can_forge());
        }

        #[test]
        fn back_returns_to_realm_selection() {
            let mut wizard = at_identity();

            wizard.back().unwrap();

            assert_eq!(wizard.step(), ForgeStep::SelectRealm);
        }

        #[test]
        fn new_portrait_resets_focal_point() {
            let mut wizard = at_identity();
            wizard.set_focal_point(FocalPoint::new(10.0, 90.0));

            wizard.set_portrait(Some("data:image/png;base64,AAAA".into()));

            assert_eq!(wizard.focal_point(), FocalPoint::CENTER);
        }

        #[test]
        fn accent_follows_the_realm() {
            let wizard = at_identity();

            assert_eq!(wizard.accent_color(), game_theme_color("Skyrim"));
            assert_eq!(ForgeWizard::new().accent_color(), DEFAULT_ACCENT);
        }
    }

    mod forging {
        use super::*;

        #[test]
        fn produces_legend_from_realm_and_identity() {
            let mut wizard = ForgeWizard::new();
            wizard
                .select_realm(RealmChoice::from(&catalog()[1]))
                .unwrap();
            wizard.set_name("  Unthur ");
            wizard.set_portrait(Some("data:image/png;base64,AAAA".into()));
            wizard.set_focal_point(FocalPoint::new(30.0, 20.0));

            let new = wizard.begin_forging().unwrap();

            assert_eq!(new.name.as_str(), "Unthur");
            assert_eq!(new.game, "Skyrim");
            assert_eq!(new.color, "bg-gradient-to-br from-slate-700 to-gray-900");
            assert_eq!(new.visage.as_deref(), Some("data:image/png;base64,AAAA"));
            assert_eq!(new.image_position, FocalPoint::new(30.0, 20.0));
            assert_eq!(wizard.step(), ForgeStep::Forging);
        }

        #[test]
        fn cannot_forge_from_realm_selection() {
            let mut wizard = ForgeWizard::new();
            wizard.set_name("Nobody");

            let err = wizard.begin_forging().unwrap_err();

            assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        }

        #[test]
        fn no_going_back_while_forging() {
            let mut wizard = ForgeWizard::new();
            wizard
                .select_realm(RealmChoice::from(&catalog()[0]))
                .unwrap();
            wizard.set_name("Fol Hahn");
            wizard.begin_forging().unwrap();

            assert!(wizard.back().is_err());
            assert_eq!(wizard.step(), ForgeStep::Forging);
        }

        #[test]
        fn realmless_legend_uses_unknown_realm() {
            let mut wizard = ForgeWizard::new();
            wizard.step = ForgeStep::Identity;
            wizard.set_name("Wanderer");

            let new = wizard.begin_forging().unwrap();

            assert_eq!(new.game, UNKNOWN_REALM);
            assert_eq!(new.color, game_gradient("Unknown"));
        }
    }
}
