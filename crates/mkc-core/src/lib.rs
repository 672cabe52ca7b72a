// mkc-core: Typed registry entities, filter options, and lazy cross-reference resolution.

pub mod collection;
pub mod convert;
pub mod error;
pub mod model;
pub mod options;

// ── Primary re-exports ──────────────────────────────────────────────
pub use collection::{Collection, Listable, Players, Teams};
pub use error::CoreError;
pub use mkc_api::{DEFAULT_BASE_URL, RegistryClient, TransportConfig};

pub use model::{
    CurrentTeam, EntityKind, Member, Player, PlayerId, PlayerProfile, PlayerRoles,
    Representation, Roster, RosterMode, Rosters, Team, TeamId, TeamLink, TeamProfile,
};
pub use options::{
    Country, Language, PlayerCategory, PlayerOptions, PlayerOrder, Query, QueryOptions,
    TeamCategory, TeamOptions, TeamOrder,
};
