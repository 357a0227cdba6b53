//! Starter content for a fresh session.
//!
//! There is no persistence layer, so every session begins with this
//! catalog and these legends.

use chrono::NaiveDate;
use legends_domain::{Game, Legend, LegendId, LegendName, Moment, MomentContent, MomentId};

const UNSPLASH: &str = "https://images.unsplash.com/photo-";
const UNSPLASH_PARAMS: &str = "?q=80&w=1000&auto=format&fit=crop";

fn unsplash(photo: &str) -> String {
    format!("{UNSPLASH}{photo}{UNSPLASH_PARAMS}")
}

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or(NaiveDate::MIN)
}

/// The default game catalog.
pub fn games() -> Vec<Game> {
    [
        (
            "khazan",
            "The First Berserker: Khazan",
            "from-red-900 to-black",
            "1542751371-adc38448a05e",
        ),
        (
            "bg3",
            "Baldur's Gate 3",
            "from-red-800 to-rose-950",
            "1627856013091-fedf7bb0615b",
        ),
        (
            "elden",
            "Elden Ring",
            "from-yellow-700 to-orange-900",
            "1519074069444-1ba4fff66d16",
        ),
        (
            "skyrim",
            "Skyrim",
            "from-slate-700 to-gray-900",
            "1451187580459-43490279c0fa",
        ),
        (
            "wow",
            "World of Warcraft",
            "from-blue-800 to-yellow-600",
            "1534438327276-14e5300c3a48",
        ),
        (
            "pokemon",
            "Pokémon",
            "from-yellow-400 to-blue-500",
            "1632314818314-16a72464731c",
        ),
        (
            "lol",
            "League of Legends",
            "from-blue-600 to-cyan-400",
            "1560932669-5e3252337a58",
        ),
    ]
    .into_iter()
    .map(|(id, name, gradient, photo)| {
        Game::new(id, name, format!("bg-gradient-to-br {gradient}")).with_image(unsplash(photo))
    })
    .collect()
}

struct SeedLegend {
    id: u128,
    name: &'static str,
    game: &'static str,
    tags: [&'static str; 3],
    signature: &'static str,
    color: &'static str,
    epitaph: &'static str,
    visage: Option<&'static str>,
    moment: Moment,
}

impl SeedLegend {
    fn build(self) -> Option<Legend> {
        let name = LegendName::new(self.name).ok()?;
        Some(
            Legend::new(name, self.game)
                .with_id(LegendId::from_u128(self.id))
                .with_tags(self.tags)
                .with_signature(self.signature)
                .with_color(self.color)
                .with_epitaph(self.epitaph)
                .with_visage(self.visage.map(unsplash))
                .with_moments(vec![self.moment]),
        )
    }
}

/// The default legends, each with one moment.
pub fn legends() -> Vec<Legend> {
    let seeds = [
        SeedLegend {
            id: 1,
            name: "Haldor",
            game: "Baldur's Gate 3",
            tags: ["Warlock", "Roleplay", "DPS"],
            signature: "Eldritch Blast",
            color: "from-emerald-900 to-slate-900",
            epitaph: "A warlock bound by a pact he no longer remembers, wielding the fel fire of forgotten gods.",
            visage: Some("1519074069444-1ba4fff66d16"),
            moment: Moment::new(
                MomentContent::Note {
                    text: "The patron demands a soul. I gave them mine long ago.".into(),
                },
                day(2023, 8, 12),
            )
            .with_id(MomentId::from_u128(101))
            .with_caption("Pact Sealed")
            .pinned(),
        },
        SeedLegend {
            id: 2,
            name: "Durge",
            game: "Baldur's Gate 3",
            tags: ["Dark Urge", "Hardcore", "Slayer"],
            signature: "Slayer Form",
            color: "from-red-950 to-stone-900",
            epitaph: "Born of dragon blood, forged in the fires of betrayal. His scales tell a story of a thousand wars.",
            visage: None,
            moment: Moment::new(
                MomentContent::Stat {
                    readout: "> STR: 20\n> CON: 18\n> CHA: 8 (Intimidation only)".into(),
                    rating: Some(9),
                },
                day(2023, 9, 1),
            )
            .with_id(MomentId::from_u128(201))
            .with_caption("Build Stats"),
        },
        SeedLegend {
            id: 3,
            name: "Shi Yan",
            game: "World of Warcraft",
            tags: ["Monk", "Speedrun", "Healer"],
            signature: "Chi Burst",
            color: "from-blue-900 to-cyan-950",
            epitaph: "The flow of mana is like water; he is the vessel that directs the storm.",
            visage: Some("1534438327276-14e5300c3a48"),
            moment: Moment::new(
                MomentContent::Image {
                    src: unsplash("1534438327276-14e5300c3a48"),
                    description: "Meditation complete.".into(),
                },
                day(2024, 1, 15),
            )
            .with_id(MomentId::from_u128(301))
            .with_caption("Peak of Serenity")
            .with_social(42, 7),
        },
        SeedLegend {
            id: 4,
            name: "Unthur",
            game: "Skyrim",
            tags: ["Stealth", "Archer", "Orc"],
            signature: "Daedric Bow",
            color: "from-green-900 to-stone-950",
            epitaph: "Silent as the grave, sharp as a razor. The last thing they never saw coming.",
            visage: Some("1500964757637-c85e8a162699"),
            moment: Moment::new(
                MomentContent::Note {
                    text: "Hail Sithis.".into(),
                },
                day(2011, 11, 11),
            )
            .with_id(MomentId::from_u128(401))
            .with_caption("Dark Brotherhood"),
        },
        SeedLegend {
            id: 5,
            name: "Fol Hahn",
            game: "Elden Ring",
            tags: ["Pyromancer", "PvP", "Faith"],
            signature: "Giantsflame Take Thee",
            color: "from-orange-700 to-red-950",
            epitaph: "Let the world burn, for from the ashes, a new order shall rise.",
            visage: Some("1555680202-c86f0e12f086"),
            moment: Moment::new(
                MomentContent::Video {
                    src: String::new(),
                    description: "1v3 clutch at the Haligtree.".into(),
                },
                day(2022, 3, 10),
            )
            .with_id(MomentId::from_u128(501))
            .with_caption("Invasion")
            .with_social(128, 19),
        },
        SeedLegend {
            id: 6,
            name: "Kadabra",
            game: "Pokémon",
            tags: ["Psychic", "Nuzlocke", "Glass Cannon"],
            signature: "Psychic",
            color: "from-yellow-700 to-purple-900",
            epitaph: "A mind sharper than any spoon. He bends reality with a mere thought.",
            visage: Some("1542751371-adc38448a05e"),
            moment: Moment::new(
                MomentContent::Stat {
                    readout: "> Sp. Atk: 31\n> Speed: 31\n> Nature: Modest".into(),
                    rating: Some(10),
                },
                day(2023, 10, 12),
            )
            .with_id(MomentId::from_u128(601))
            .with_caption("IV Check"),
        },
        SeedLegend {
            id: 7,
            name: "Khazan",
            game: "The First Berserker: Khazan",
            tags: ["Berserker", "Lore Master", "Hardcore"],
            signature: "Blood Rage",
            color: "from-red-950 to-black",
            epitaph: "Betrayal, revenge, swift spear wielding legendary general.",
            visage: Some("1519074069444-1ba4fff66d16"),
            moment: Moment::new(
                MomentContent::Note {
                    text: "They took everything. I will take their lives.".into(),
                },
                day(2025, 2, 20),
            )
            .with_id(MomentId::from_u128(701))
            .with_caption("Revenge Begins")
            .pinned(),
        },
    ];

    seeds.into_iter().filter_map(SeedLegend::build).collect()
}
