//! Discovery feed derivation.
//!
//! A read-only view over every legend: a flat moment stream newest first
//! and a ranking of legends by their latest moment. Filtering never
//! touches the library itself.

use std::collections::BTreeSet;

use legends_domain::common::contains_ignore_case;
use legends_domain::{Game, Legend, LegendId, Moment};

/// Moments shown on the following tab.
pub const FOLLOWING_MOMENT_LIMIT: usize = 2;

/// Legends shown on the following tab.
pub const FOLLOWING_LEGEND_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedTab {
    #[default]
    ForYou,
    Following,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentFilter {
    #[default]
    All,
    Moments,
    Legends,
}

impl ContentFilter {
    pub const ALL: [ContentFilter; 3] = [Self::All, Self::Moments, Self::Legends];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Moments => "Moments",
            Self::Legends => "Legends",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub tab: FeedTab,
    pub content: ContentFilter,
    /// Game names; a legend matches when its game is any of them.
    pub games: BTreeSet<String>,
    /// Free text narrowing the games offered in the filter sheet.
    pub game_search: String,
}

impl FeedQuery {
    pub fn toggle_game(&mut self, name: &str) {
        if !self.games.remove(name) {
            self.games.insert(name.to_string());
        }
    }

    /// Reset content, games and search. The tab is kept.
    pub fn clear(&mut self) {
        self.content = ContentFilter::All;
        self.games.clear();
        self.game_search.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.content != ContentFilter::All || !self.games.is_empty()
    }

    pub fn shows_moments(&self) -> bool {
        self.content != ContentFilter::Legends
    }

    pub fn shows_legends(&self) -> bool {
        self.content != ContentFilter::Moments
    }

    /// Catalog games matching the filter sheet search.
    pub fn searchable_games<'a>(&self, catalog: &'a [Game]) -> Vec<&'a Game> {
        catalog
            .iter()
            .filter(|g| contains_ignore_case(&g.name, self.game_search.trim()))
            .collect()
    }

    fn matches_game(&self, game: &str) -> bool {
        self.games.is_empty() || self.games.contains(game)
    }
}

/// A moment annotated with its legend.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedMoment<'a> {
    pub moment: &'a Moment,
    pub legend_id: LegendId,
    pub legend_name: &'a str,
    pub legend_game: &'a str,
    pub legend_visage: Option<&'a str>,
    pub legend_color: &'a str,
}

impl<'a> FeedMoment<'a> {
    fn new(legend: &'a Legend, moment: &'a Moment) -> Self {
        Self {
            moment,
            legend_id: legend.id(),
            legend_name: legend.name().as_str(),
            legend_game: legend.game(),
            legend_visage: legend.visage(),
            legend_color: legend.color(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedView<'a> {
    pub moments: Vec<FeedMoment<'a>>,
    pub legends: Vec<&'a Legend>,
}

impl FeedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty() && self.legends.is_empty()
    }
}

pub fn derive_feed<'a>(legends: &'a [Legend], query: &FeedQuery) -> FeedView<'a> {
    let visible: Vec<&Legend> = legends
        .iter()
        .filter(|l| query.matches_game(l.game()))
        .collect();

    let mut moments = Vec::new();
    if query.shows_moments() {
        moments = visible
            .iter()
            .flat_map(|&legend| {
                legend
                    .moments()
                    .iter()
                    .map(move |moment| FeedMoment::new(legend, moment))
            })
            .collect();
        moments.sort_by(|a, b| b.moment.date().cmp(&a.moment.date()));
    }

    let mut ranked = Vec::new();
    if query.shows_legends() {
        ranked = visible;
        // `None` orders before any date, so legends without moments land last.
        ranked.sort_by(|a, b| b.latest_moment_date().cmp(&a.latest_moment_date()));
    }

    if query.tab == FeedTab::Following {
        moments.truncate(FOLLOWING_MOMENT_LIMIT);
        ranked.truncate(FOLLOWING_LEGEND_LIMIT);
    }

    FeedView {
        moments,
        legends: ranked,
    }
}
