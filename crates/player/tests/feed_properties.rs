//! Discovery feed properties over a multi-legend library.

use chrono::NaiveDate;
use legends_domain::{Legend, LegendId, LegendName, Moment, MomentContent};
use legends_player::application::{derive_feed, ContentFilter, FeedQuery, FeedTab};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn legend(id: u128, game: &str, dates: &[NaiveDate]) -> Legend {
    let moments = dates
        .iter()
        .map(|&date| Moment::new(MomentContent::Quote { text: "...".into() }, date))
        .collect();
    Legend::new(LegendName::new(format!("Legend {id}")).unwrap(), game)
        .with_id(LegendId::from_u128(id))
        .with_moments(moments)
}

#[test]
fn for_you_returns_every_moment_newest_first() {
    let legends = vec![
        legend(1, "Skyrim", &[day(2021, 5, 1), day(2024, 2, 2)]),
        legend(2, "Elden Ring", &[day(2023, 1, 1)]),
        legend(3, "Hades", &[day(2022, 7, 7), day(2020, 3, 3), day(2025, 1, 1)]),
    ];

    let feed = derive_feed(&legends, &FeedQuery::default());

    assert_eq!(feed.moments.len(), 6);
    let dates: Vec<NaiveDate> = feed.moments.iter().map(|m| m.moment.date()).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[test]
fn following_caps_the_moment_stream() {
    let legends = vec![
        legend(1, "Skyrim", &[day(2021, 5, 1), day(2024, 2, 2)]),
        legend(2, "Elden Ring", &[day(2023, 1, 1), day(2019, 9, 9)]),
    ];
    let query = FeedQuery {
        tab: FeedTab::Following,
        ..FeedQuery::default()
    };

    let feed = derive_feed(&legends, &query);

    assert!(feed.moments.len() <= 2);
    assert!(feed.legends.len() <= 1);
}

#[test]
fn display_order_does_not_affect_feed_order() {
    // Library order is [3, 1, 2]; the feed ignores it and sorts by date.
    let legends = vec![
        legend(3, "Hades", &[]),
        legend(1, "Skyrim", &[day(2024, 1, 1)]),
        legend(2, "Elden Ring", &[day(2023, 6, 1)]),
    ];

    let feed = derive_feed(&legends, &FeedQuery::default());

    let owners: Vec<LegendId> = feed.moments.iter().map(|m| m.legend_id).collect();
    assert_eq!(owners, vec![LegendId::from_u128(1), LegendId::from_u128(2)]);
}

#[test]
fn game_and_content_filters_narrow_without_touching_the_library() {
    let legends = vec![
        legend(1, "Skyrim", &[day(2024, 1, 1)]),
        legend(2, "Elden Ring", &[day(2023, 6, 1)]),
    ];
    let mut query = FeedQuery {
        content: ContentFilter::Legends,
        ..FeedQuery::default()
    };
    query.toggle_game("Elden Ring");

    let feed = derive_feed(&legends, &query);

    assert!(feed.moments.is_empty());
    assert_eq!(feed.legends.len(), 1);
    assert_eq!(feed.legends[0].id(), LegendId::from_u128(2));
    assert_eq!(legends.len(), 2);
}
