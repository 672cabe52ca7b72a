// ── Team domain types ──

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;
use url::Url;

use mkc_api::RegistryClient;

use super::entity_id::{EntityKind, PlayerId, Representation, TeamId};
use super::player::Player;
use crate::convert;
use crate::error::CoreError;

/// Game mode a roster competes in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RosterMode {
    #[serde(rename = "150cc")]
    #[strum(to_string = "150cc", serialize = "cc150")]
    Cc150,
    #[serde(rename = "200cc")]
    #[strum(to_string = "200cc", serialize = "cc200")]
    Cc200,
    #[serde(rename = "mktour_vs")]
    #[strum(to_string = "mktour_vs", serialize = "mktour", serialize = "MkTourVs")]
    MkTourVs,
}

/// A rostered player as listed on a team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: PlayerId,
    pub name: String,
    pub custom_field_name: Option<String>,
    pub custom_field: Option<String>,
    pub status: Option<String>,
    pub registered_since: Option<DateTime<Utc>>,
    pub registered_since_human: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub is_leader: bool,
}

impl Member {
    /// Fetch the full player behind this roster entry.
    ///
    /// Every call is a fresh request.
    pub async fn get_player(&self, client: &RegistryClient) -> Result<Player, CoreError> {
        Player::fetch(client, self.id).await
    }
}

/// A team's roster for one game mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub mode_key: String,
    pub mode_title: Option<String>,
    pub name: Option<String>,
    pub is_user_member: bool,
    pub is_active: bool,
    pub members: Vec<Member>,
}

impl Roster {
    pub fn member(&self, id: PlayerId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn leaders(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_leader)
    }
}

/// Rosters keyed by game mode. A team may field any subset of modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rosters {
    #[serde(rename = "150cc")]
    pub cc150: Option<Roster>,
    #[serde(rename = "200cc")]
    pub cc200: Option<Roster>,
    pub mktour_vs: Option<Roster>,
}

impl Rosters {
    pub fn get(&self, mode: RosterMode) -> Option<&Roster> {
        match mode {
            RosterMode::Cc150 => self.cc150.as_ref(),
            RosterMode::Cc200 => self.cc200.as_ref(),
            RosterMode::MkTourVs => self.mktour_vs.as_ref(),
        }
    }

    /// Present rosters in mode order.
    pub fn iter(&self) -> impl Iterator<Item = (RosterMode, &Roster)> {
        [
            (RosterMode::Cc150, self.cc150.as_ref()),
            (RosterMode::Cc200, self.cc200.as_ref()),
            (RosterMode::MkTourVs, self.mktour_vs.as_ref()),
        ]
        .into_iter()
        .filter_map(|(mode, roster)| roster.map(|r| (mode, r)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Look a member up in any roster.
    pub fn member(&self, id: PlayerId) -> Option<&Member> {
        self.iter().find_map(|(_, roster)| roster.member(id))
    }

    /// Players counted once even when rostered in several modes.
    pub fn unique_player_count(&self) -> usize {
        self.iter()
            .flat_map(|(_, roster)| roster.members.iter().map(|m| m.id))
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Reference to a related team (primary or secondary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLink {
    pub id: TeamId,
    pub name: String,
}

impl TeamLink {
    pub async fn get_team(&self, client: &RegistryClient) -> Result<Team, CoreError> {
        Team::fetch(client, self.id).await
    }
}

/// Fields only returned by a by-id team lookup. Text fields are kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub category: Option<String>,
    pub description: Option<String>,
    pub main_language: Option<String>,
    /// Absolute URL of the uploaded logo.
    pub logo: Option<Url>,
    pub is_historical: bool,
    pub primary_team: Option<TeamLink>,
    pub secondary_teams: Vec<TeamLink>,
    pub rosters: Rosters,
}

/// A registered team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub tag: String,
    pub color: Option<u32>,
    pub status: Option<String>,
    pub recruitment_status: Option<String>,
    pub founding_date: Option<DateTime<Utc>>,
    pub founding_date_human: Option<String>,
    pub player_count: Option<u32>,
    /// Reported by listings.
    pub is_shadow: Option<bool>,

    pub profile: Option<TeamProfile>,
}

impl Team {
    /// Fetch the full team with the given id, rosters included.
    pub async fn fetch(client: &RegistryClient, id: impl Into<TeamId>) -> Result<Self, CoreError> {
        let id = id.into();
        let record = client.get_team(id.get()).await?;
        let team = convert::team_from_record(record, client);

        if team.id != id {
            return Err(CoreError::IdMismatch {
                entity: EntityKind::Team,
                requested: id.get(),
                received: team.id.get(),
            });
        }
        Ok(team)
    }

    /// Replace this team with its full representation.
    ///
    /// On error `self` is left as it was.
    pub async fn load(&mut self, client: &RegistryClient) -> Result<(), CoreError> {
        debug!(id = %self.id, representation = ?self.representation(), "loading team");
        *self = Self::fetch(client, self.id).await?;
        Ok(())
    }

    pub fn representation(&self) -> Representation {
        if self.profile.is_some() {
            Representation::Full
        } else {
            Representation::Shallow
        }
    }

    pub fn is_full(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&TeamProfile> {
        self.profile.as_ref()
    }

    pub fn rosters(&self) -> Option<&Rosters> {
        self.profile.as_ref().map(|p| &p.rosters)
    }

    pub fn roster(&self, mode: RosterMode) -> Option<&Roster> {
        self.rosters()?.get(mode)
    }

    pub fn logo(&self) -> Option<&Url> {
        self.profile.as_ref()?.logo.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.profile.as_ref()?.description.as_deref()
    }

    pub fn main_language(&self) -> Option<&str> {
        self.profile.as_ref()?.main_language.as_deref()
    }

    pub fn is_historical(&self) -> Option<bool> {
        self.profile.as_ref().map(|p| p.is_historical)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn member(id: u64, leader: bool) -> Member {
        Member {
            id: PlayerId::new(id),
            name: format!("p{id}"),
            custom_field_name: None,
            custom_field: None,
            status: None,
            registered_since: None,
            registered_since_human: None,
            country_code: None,
            country_name: None,
            is_leader: leader,
        }
    }

    fn roster(mode_key: &str, ids: &[u64]) -> Roster {
        Roster {
            mode_key: mode_key.into(),
            mode_title: None,
            name: None,
            is_user_member: false,
            is_active: true,
            members: ids.iter().map(|&id| member(id, id == ids[0])).collect(),
        }
    }

    #[test]
    fn roster_mode_tokens() {
        assert_eq!(RosterMode::Cc150.to_string(), "150cc");
        assert_eq!("MKTOUR_VS".parse::<RosterMode>().unwrap(), RosterMode::MkTourVs);
        assert_eq!("cc200".parse::<RosterMode>().unwrap(), RosterMode::Cc200);
    }

    #[test]
    fn rosters_iterate_present_modes_in_order() {
        let rosters = Rosters {
            cc150: Some(roster("150cc", &[1, 2, 3])),
            cc200: None,
            mktour_vs: Some(roster("mktour_vs", &[3, 4])),
        };

        let modes: Vec<RosterMode> = rosters.iter().map(|(mode, _)| mode).collect();
        assert_eq!(modes, vec![RosterMode::Cc150, RosterMode::MkTourVs]);
        assert!(rosters.get(RosterMode::Cc200).is_none());
        assert_eq!(rosters.unique_player_count(), 4);
        assert_eq!(rosters.member(PlayerId::new(4)).unwrap().name, "p4");
        assert_eq!(rosters.cc150.as_ref().unwrap().leaders().count(), 1);
    }

    #[test]
    fn empty_rosters() {
        assert!(Rosters::default().is_empty());
        assert_eq!(Rosters::default().unique_player_count(), 0);
    }
}
