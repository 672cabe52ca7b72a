// ── Domain model ──
//
// Players and teams in two representations: shallow (as embedded in a
// listing or another entity) and full (from a by-id lookup). Full-only
// data lives behind an `Option<…Profile>` so "not fetched" is never
// confused with "fetched and empty".

pub mod entity_id;
pub mod player;
pub mod team;

pub use entity_id::{EntityKind, PlayerId, Representation, TeamId};
pub use player::{CurrentTeam, Player, PlayerProfile, PlayerRoles};
pub use team::{Member, Roster, RosterMode, Rosters, Team, TeamLink, TeamProfile};
