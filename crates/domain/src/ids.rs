use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ids for user-authored records.
///
/// New ids are UUIDv7, so they are unique and roughly creation-ordered within
/// a session. Seed data uses `from_u128` to keep fixtures readable.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub const fn from_u128(raw: u128) -> Self {
                Self(Uuid::from_u128(raw))
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(LegendId);
define_id!(MomentId);

/// Catalog id for a game ("realm").
///
/// Catalog entries use short slugs (`bg3`), search results use the external
/// reference (`igdb-1942`), and free-typed realms use a slug of their name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from an external catalog reference.
    pub fn external(reference: u64) -> Self {
        Self(format!("igdb-{reference}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GameId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = LegendId::new();
        let b = LegendId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_are_time_ordered() {
        let first = MomentId::new();
        let second = MomentId::new();
        assert!(first < second);
    }

    #[test]
    fn fixture_ids_are_stable() {
        assert_eq!(LegendId::from_u128(3), LegendId::from_u128(3));
        assert_ne!(LegendId::from_u128(3), LegendId::from_u128(1));
    }

    #[test]
    fn external_game_id_format() {
        assert_eq!(GameId::external(1942).as_str(), "igdb-1942");
    }
}
