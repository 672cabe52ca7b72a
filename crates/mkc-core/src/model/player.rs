// ── Player domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use mkc_api::RegistryClient;

use super::entity_id::{EntityKind, PlayerId, Representation, TeamId};
use super::team::Team;
use crate::error::CoreError;

/// Staff and supporter badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PlayerRoles {
    pub supporter: bool,
    pub administrator: bool,
    pub moderator: bool,
    pub global_event_admin: bool,
    pub global_event_mod: bool,
    pub event_admin: bool,
    pub event_mod: bool,
}

/// The team a player is rostered on for one game mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTeam {
    pub mode: Option<String>,
    pub mode_title: Option<String>,
    /// e.g. `mk8dx_150`.
    pub mode_key: Option<String>,
    pub team_id: TeamId,
    pub team_name: String,
    pub team_tag: String,
    pub team_status: Option<String>,
    pub team_color: Option<u32>,
}

impl CurrentTeam {
    /// Fetch the full team this entry points at.
    pub async fn get_team(&self, client: &RegistryClient) -> Result<Team, CoreError> {
        Team::fetch(client, self.team_id).await
    }
}

/// Fields only returned by a by-id player lookup.
///
/// Text fields are kept as sent: `Some("")` is an empty value, `None` a
/// field the registry left out or sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub is_hidden: bool,
    pub region: Option<String>,
    pub city: Option<String>,
    pub discord_privacy: Option<String>,
    pub discord_tag: Option<String>,
    pub profile_picture: Option<String>,
    pub profile_picture_border_color: Option<u32>,
    pub profile_message: Option<String>,
    pub roles: PlayerRoles,
    /// One entry per game mode the player is rostered in.
    pub current_teams: Vec<CurrentTeam>,
}

/// A registered player.
///
/// Listings produce shallow players (`profile` is `None`); [`Player::fetch`]
/// and [`Player::load`] produce full ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub user_id: Option<u64>,
    pub name: String,
    pub status: Option<String>,
    pub registered_at: Option<DateTime<Utc>>,
    pub registered_at_human: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,

    // Friend codes
    pub switch_fc: Option<String>,
    pub nnid: Option<String>,
    pub fc_3ds: Option<String>,
    pub mktour_fc: Option<String>,

    // Category listings only
    pub current_team: Option<CurrentTeam>,
    pub team_registered_at: Option<DateTime<Utc>>,
    pub team_registered_at_human: Option<String>,

    pub profile: Option<PlayerProfile>,
}

impl Player {
    /// Fetch the full player with the given id.
    pub async fn fetch(
        client: &RegistryClient,
        id: impl Into<PlayerId>,
    ) -> Result<Self, CoreError> {
        let id = id.into();
        let record = client.get_player(id.get()).await?;
        let player = Self::from(record);

        if player.id != id {
            return Err(CoreError::IdMismatch {
                entity: EntityKind::Player,
                requested: id.get(),
                received: player.id.get(),
            });
        }
        Ok(player)
    }

    /// Replace this player with its full representation.
    ///
    /// On error `self` is left as it was.
    pub async fn load(&mut self, client: &RegistryClient) -> Result<(), CoreError> {
        debug!(id = %self.id, representation = ?self.representation(), "loading player");
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

    pub fn profile(&self) -> Option<&PlayerProfile> {
        self.profile.as_ref()
    }

    pub fn is_banned(&self) -> Option<bool> {
        self.profile.as_ref().map(|p| p.is_banned)
    }

    pub fn is_hidden(&self) -> Option<bool> {
        self.profile.as_ref().map(|p| p.is_hidden)
    }

    pub fn is_supporter(&self) -> Option<bool> {
        self.profile.as_ref().map(|p| p.roles.supporter)
    }

    pub fn roles(&self) -> Option<&PlayerRoles> {
        self.profile.as_ref().map(|p| &p.roles)
    }

    pub fn profile_message(&self) -> Option<&str> {
        self.profile.as_ref()?.profile_message.as_deref()
    }

    pub fn discord_tag(&self) -> Option<&str> {
        self.profile.as_ref()?.discord_tag.as_deref()
    }

    /// `None` until the player is loaded.
    pub fn current_teams(&self) -> Option<&[CurrentTeam]> {
        self.profile.as_ref().map(|p| p.current_teams.as_slice())
    }
}
