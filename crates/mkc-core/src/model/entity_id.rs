// ── Core identity types ──
//
// Registry ids are plain integers. Separate newtypes keep a player id from
// being handed to a team lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! registry_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

registry_id!(
    /// Registry id of a player (not the forum user id).
    PlayerId
);

registry_id!(
    /// Registry id of a team.
    TeamId
);

// ── Entity kind ─────────────────────────────────────────────────────

/// Which registry resource an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Player,
    Team,
}

impl EntityKind {
    /// Map the resource label used by `mkc-api` errors.
    pub fn from_resource(resource: &str) -> Self {
        match resource {
            "team" => Self::Team,
            _ => Self::Player,
        }
    }
}

// ── Representation ──────────────────────────────────────────────────

/// How much of an entity has been fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Built from a fragment embedded in a listing or another entity.
    Shallow,
    /// Built from a by-id lookup.
    Full,
}
