// Registry API response types
//
// Models for the registry's JSON payloads. Two shapes exist per entity:
// the full record returned by a by-id lookup, and the reduced entry that
// appears nested in listings. The registry is loose about types (0/1
// integers for booleans, date objects vs. strings, `[]` for empty maps),
// so the helpers below accept every variant seen in the wild.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Field helpers ────────────────────────────────────────────────────

fn flag_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim(), "1" | "true" | "yes"),
        _ => false,
    }
}

/// Deserialize a flag that may arrive as `true`, `1`, or `"1"`. `null` is `false`.
fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().is_some_and(flag_value))
}

/// Like [`de_flag`] but keeps `null` as `None`.
fn de_opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(flag_value))
}

/// `rosters` is an object keyed by mode, or `[]` when the team has none.
///
/// Any other shape, or a roster that fails to parse, is an error.
fn de_rosters<'de, D>(deserializer: D) -> Result<RostersRecord, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(RostersRecord::default()),
        Some(Value::Array(items)) if items.is_empty() => Ok(RostersRecord::default()),
        Some(value @ Value::Object(_)) => {
            RostersRecord::deserialize(value).map_err(serde::de::Error::custom)
        }
        Some(other) => Err(serde::de::Error::custom(format!(
            "rosters: expected an object or an empty array, got {other}"
        ))),
    }
}

// ── Dates ────────────────────────────────────────────────────────────

/// A registry timestamp.
///
/// By-id payloads wrap dates as `{"date": "2020-10-22 17:33:57.000000", ...}`
/// while listings carry the bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryDate {
    Object {
        date: String,
        #[serde(default)]
        timezone: Option<String>,
    },
    Text(String),
}

impl RegistryDate {
    /// The raw date text, whichever shape it came in.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Object { date, .. } | Self::Text(date) => date,
        }
    }
}

// ── Listing envelope ─────────────────────────────────────────────────

/// Response of a category listing: `{ "count": n, "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub count: u32,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

// ── Player ───────────────────────────────────────────────────────────

/// Full player object from `players/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub registered_at: Option<RegistryDate>,
    #[serde(default)]
    pub registered_at_human: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub player_status: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_banned: bool,
    #[serde(default)]
    pub ban_reason: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_hidden: bool,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub discord_privacy: Option<String>,
    #[serde(default)]
    pub discord_tag: Option<String>,
    #[serde(default)]
    pub switch_fc: Option<String>,
    #[serde(default)]
    pub nnid: Option<String>,
    #[serde(default)]
    pub fc_3ds: Option<String>,
    #[serde(default)]
    pub mktour_fc: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub profile_picture_border_color: Option<u32>,
    #[serde(default)]
    pub profile_message: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_supporter: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_administrator: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_moderator: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_global_event_admin: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_global_event_mod: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_event_admin: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_event_mod: bool,
    #[serde(default)]
    pub current_teams: Vec<CurrentTeamRecord>,
}

/// One entry of a player's `current_teams`, one per rostered game mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentTeamRecord {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub mode_title: Option<String>,
    #[serde(default)]
    pub mode_key: Option<String>,
    pub team_id: u64,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub team_tag: String,
    #[serde(default)]
    pub team_status: Option<String>,
    #[serde(default)]
    pub team_color: Option<u32>,
}

/// Player as embedded in a listing.
///
/// Category-filtered listings additionally inline the player's team for
/// that mode (`team_id`, `team_name`, ...) and the team join date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub player_id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub registered_at: Option<RegistryDate>,
    #[serde(default)]
    pub registered_at_human: Option<String>,
    #[serde(default)]
    pub team_registered_at: Option<RegistryDate>,
    #[serde(default)]
    pub team_registered_at_human: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub player_status: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub switch_fc: Option<String>,
    #[serde(default)]
    pub nnid: Option<String>,
    #[serde(default)]
    pub fc_3ds: Option<String>,
    #[serde(default)]
    pub mktour_fc: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub mode_title: Option<String>,
    #[serde(default)]
    pub mode_key: Option<String>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub team_tag: Option<String>,
    #[serde(default)]
    pub team_status: Option<String>,
    #[serde(default)]
    pub team_color: Option<u32>,
}

// ── Team ─────────────────────────────────────────────────────────────

/// Full team object from `teams/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: u64,
    #[serde(default)]
    pub team_category: Option<String>,
    #[serde(default)]
    pub team_description: Option<String>,
    #[serde(default)]
    pub main_language: Option<String>,
    pub team_name: String,
    #[serde(default)]
    pub team_tag: String,
    #[serde(default)]
    pub team_color: Option<u32>,
    #[serde(default)]
    pub team_status: Option<String>,
    #[serde(default)]
    pub recruitment_status: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_historical: bool,
    #[serde(default, deserialize_with = "de_opt_flag")]
    pub is_shadow: Option<bool>,
    #[serde(default)]
    pub player_count: Option<u32>,
    #[serde(default)]
    pub founding_date: Option<RegistryDate>,
    #[serde(default)]
    pub founding_date_human: Option<String>,
    #[serde(default)]
    pub team_logo: Option<String>,
    #[serde(default)]
    pub primary_team_id: Option<u64>,
    #[serde(default)]
    pub primary_team_name: Option<String>,
    #[serde(default, deserialize_with = "de_rosters")]
    pub rosters: RostersRecord,
    #[serde(default)]
    pub secondary_teams: Vec<TeamLinkRecord>,
}

/// Rosters keyed by game mode. Each mode is independently absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RostersRecord {
    #[serde(rename = "150cc", default)]
    pub cc150: Option<RosterRecord>,
    #[serde(rename = "200cc", default)]
    pub cc200: Option<RosterRecord>,
    #[serde(default)]
    pub mktour_vs: Option<RosterRecord>,
}

/// A team's roster for one game mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    pub mode_key: String,
    #[serde(default)]
    pub mode_title: Option<String>,
    #[serde(default)]
    pub roster_name: Option<String>,
    /// Always false for anonymous API callers.
    #[serde(default, deserialize_with = "de_flag")]
    pub is_user_member: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub active: bool,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

/// Roster member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub player_id: u64,
    pub display_name: String,
    #[serde(default)]
    pub custom_field_name: Option<String>,
    #[serde(default)]
    pub custom_field: Option<String>,
    #[serde(default)]
    pub player_status: Option<String>,
    #[serde(default)]
    pub registered_since: Option<RegistryDate>,
    #[serde(default)]
    pub registered_since_human: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub team_leader: bool,
}

/// `{id, name}` pair used for secondary teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamLinkRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Team as embedded in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team_id: u64,
    pub team_name: String,
    #[serde(default)]
    pub team_tag: String,
    #[serde(default)]
    pub team_color: Option<u32>,
    #[serde(default)]
    pub team_status: Option<String>,
    #[serde(default)]
    pub recruitment_status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_flag")]
    pub is_shadow: Option<bool>,
    #[serde(default)]
    pub player_count: Option<u32>,
    #[serde(default)]
    pub founding_date: Option<RegistryDate>,
    #[serde(default)]
    pub founding_date_human: Option<String>,
}
