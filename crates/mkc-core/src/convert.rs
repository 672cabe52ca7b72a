// ── API-to-domain type conversions ──
//
// Bridges raw `mkc_api` registry records into `mkc_core::model` types. Dates
// are parsed into `DateTime<Utc>`, blank strings become `None`, and embedded
// entries map to the shallow representation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use mkc_api::RegistryClient;
use mkc_api::registry::models::{
    CurrentTeamRecord, MemberRecord, PlayerEntry, PlayerRecord, RegistryDate, RosterRecord,
    RostersRecord, TeamEntry, TeamLinkRecord, TeamRecord,
};

use crate::model::{
    CurrentTeam, Member, Player, PlayerId, PlayerProfile, PlayerRoles, Roster, Rosters, Team,
    TeamId, TeamLink, TeamProfile,
};

// ── Helpers ────────────────────────────────────────────────────────

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a registry date, silently dropping unparseable values.
///
/// Accepts `2020-10-22 17:33:57[.000000]` (taken as UTC), RFC 3339 and bare
/// `YYYY-MM-DD`.
pub(crate) fn parse_registry_date(raw: Option<&RegistryDate>) -> Option<DateTime<Utc>> {
    let text = raw?.as_str().trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    debug!(date = text, "unrecognised registry date");
    None
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

// ── Player ─────────────────────────────────────────────────────────

impl From<CurrentTeamRecord> for CurrentTeam {
    fn from(r: CurrentTeamRecord) -> Self {
        Self {
            mode: non_blank(r.mode),
            mode_title: non_blank(r.mode_title),
            mode_key: non_blank(r.mode_key),
            team_id: TeamId::new(r.team_id),
            team_name: r.team_name,
            team_tag: r.team_tag,
            team_status: non_blank(r.team_status),
            team_color: r.team_color,
        }
    }
}

impl From<PlayerRecord> for Player {
    fn from(r: PlayerRecord) -> Self {
        let roles = PlayerRoles {
            supporter: r.is_supporter,
            administrator: r.is_administrator,
            moderator: r.is_moderator,
            global_event_admin: r.is_global_event_admin,
            global_event_mod: r.is_global_event_mod,
            event_admin: r.is_event_admin,
            event_mod: r.is_event_mod,
        };

        let profile = PlayerProfile {
            is_banned: r.is_banned,
            ban_reason: r.ban_reason,
            is_hidden: r.is_hidden,
            region: r.region,
            city: r.city,
            discord_privacy: r.discord_privacy,
            discord_tag: r.discord_tag,
            profile_picture: r.profile_picture,
            profile_picture_border_color: r.profile_picture_border_color,
            profile_message: r.profile_message,
            roles,
            current_teams: r.current_teams.into_iter().map(CurrentTeam::from).collect(),
        };

        Self {
            id: PlayerId::new(r.id),
            user_id: r.user_id,
            name: r.display_name,
            status: non_blank(r.player_status),
            registered_at: parse_registry_date(r.registered_at.as_ref()),
            registered_at_human: non_blank(r.registered_at_human),
            country_code: non_blank(r.country_code),
            country_name: non_blank(r.country_name),
            switch_fc: non_blank(r.switch_fc),
            nnid: non_blank(r.nnid),
            fc_3ds: non_blank(r.fc_3ds),
            mktour_fc: non_blank(r.mktour_fc),
            current_team: None,
            team_registered_at: None,
            team_registered_at_human: None,
            profile: Some(profile),
        }
    }
}

impl From<PlayerEntry> for Player {
    fn from(e: PlayerEntry) -> Self {
        // Category listings inline the player's team for that mode.
        let current_team = e.team_id.map(|team_id| CurrentTeam {
            mode: non_blank(e.mode),
            mode_title: non_blank(e.mode_title),
            mode_key: non_blank(e.mode_key),
            team_id: TeamId::new(team_id),
            team_name: e.team_name.unwrap_or_default(),
            team_tag: e.team_tag.unwrap_or_default(),
            team_status: non_blank(e.team_status),
            team_color: e.team_color,
        });

        Self {
            id: PlayerId::new(e.player_id),
            user_id: e.user_id,
            name: e.display_name,
            status: non_blank(e.player_status),
            registered_at: parse_registry_date(e.registered_at.as_ref()),
            registered_at_human: non_blank(e.registered_at_human),
            country_code: non_blank(e.country_code),
            country_name: non_blank(e.country_name),
            switch_fc: non_blank(e.switch_fc),
            nnid: non_blank(e.nnid),
            fc_3ds: non_blank(e.fc_3ds),
            mktour_fc: non_blank(e.mktour_fc),
            current_team,
            team_registered_at: parse_registry_date(e.team_registered_at.as_ref()),
            team_registered_at_human: non_blank(e.team_registered_at_human),
            profile: None,
        }
    }
}

// ── Team ───────────────────────────────────────────────────────────

impl From<MemberRecord> for Member {
    fn from(r: MemberRecord) -> Self {
        Self {
            id: PlayerId::new(r.player_id),
            name: r.display_name,
            custom_field_name: non_blank(r.custom_field_name),
            custom_field: non_blank(r.custom_field),
            status: non_blank(r.player_status),
            registered_since: parse_registry_date(r.registered_since.as_ref()),
            registered_since_human: non_blank(r.registered_since_human),
            country_code: non_blank(r.country_code),
            country_name: non_blank(r.country_name),
            is_leader: r.team_leader,
        }
    }
}

impl From<RosterRecord> for Roster {
    fn from(r: RosterRecord) -> Self {
        Self {
            mode_key: r.mode_key,
            mode_title: non_blank(r.mode_title),
            name: non_blank(r.roster_name),
            is_user_member: r.is_user_member,
            is_active: r.active,
            members: r.members.into_iter().map(Member::from).collect(),
        }
    }
}

impl From<RostersRecord> for Rosters {
    fn from(r: RostersRecord) -> Self {
        Self {
            cc150: r.cc150.map(Roster::from),
            cc200: r.cc200.map(Roster::from),
            mktour_vs: r.mktour_vs.map(Roster::from),
        }
    }
}

impl From<TeamLinkRecord> for TeamLink {
    fn from(r: TeamLinkRecord) -> Self {
        Self {
            id: TeamId::new(r.id),
            name: r.name,
        }
    }
}

impl From<TeamEntry> for Team {
    fn from(e: TeamEntry) -> Self {
        Self {
            id: TeamId::new(e.team_id),
            name: e.team_name,
            tag: e.team_tag,
            color: e.team_color,
            status: non_blank(e.team_status),
            recruitment_status: non_blank(e.recruitment_status),
            founding_date: parse_registry_date(e.founding_date.as_ref()),
            founding_date_human: non_blank(e.founding_date_human),
            player_count: e.player_count,
            is_shadow: e.is_shadow,
            profile: None,
        }
    }
}

/// Build a full team. The logo path is resolved against the client's storage root.
pub(crate) fn team_from_record(r: TeamRecord, client: &RegistryClient) -> Team {
    let logo = non_blank(r.team_logo).and_then(|path| match client.storage_url(&path) {
        Ok(url) => Some(url),
        Err(e) => {
            debug!(logo = %path, error = %e, "unusable team logo path");
            None
        }
    });

    let primary_team = r.primary_team_id.map(|id| TeamLink {
        id: TeamId::new(id),
        name: r.primary_team_name.unwrap_or_default(),
    });

    let rosters = Rosters::from(r.rosters);
    let player_count = r
        .player_count
        .or_else(|| u32::try_from(rosters.unique_player_count()).ok());

    let profile = TeamProfile {
        category: r.team_category,
        description: r.team_description,
        main_language: r.main_language,
        logo,
        is_historical: r.is_historical,
        primary_team,
        secondary_teams: r.secondary_teams.into_iter().map(TeamLink::from).collect(),
        rosters,
    };

    Team {
        id: TeamId::new(r.id),
        name: r.team_name,
        tag: r.team_tag,
        color: r.team_color,
        status: non_blank(r.team_status),
        recruitment_status: non_blank(r.recruitment_status),
        founding_date: parse_registry_date(r.founding_date.as_ref()),
        founding_date_human: non_blank(r.founding_date_human),
        player_count,
        is_shadow: r.is_shadow,
        profile: Some(profile),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client() -> RegistryClient {
        RegistryClient::public().unwrap()
    }

    #[test]
    fn registry_dates_in_every_shape() {
        let object = RegistryDate::Object {
            date: "2020-10-22 17:33:57.000000".into(),
            timezone: Some("UTC".into()),
        };
        let dt = parse_registry_date(Some(&object)).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 10, 22));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (17, 33, 57));

        let plain = RegistryDate::Text("2020-10-22 17:33:57".into());
        assert_eq!(parse_registry_date(Some(&plain)), Some(dt));

        let rfc = RegistryDate::Text("2020-10-22T17:33:57+00:00".into());
        assert_eq!(parse_registry_date(Some(&rfc)), Some(dt));

        let day = RegistryDate::Text("2020-10-22".into());
        assert_eq!(parse_registry_date(Some(&day)).unwrap().day(), 22);

        assert_eq!(parse_registry_date(Some(&RegistryDate::Text("soon".into()))), None);
        assert_eq!(parse_registry_date(None), None);
    }

    #[test]
    fn category_entry_carries_current_team() {
        let entry: PlayerEntry = serde_json::from_value(json!({
            "player_id": 1655,
            "display_name": "Rollo",
            "registered_at": "2016-05-01 10:00:00",
            "team_registered_at": "2021-01-01 00:00:00",
            "mode": "mk8dx",
            "mode_key": "mk8dx_150",
            "team_id": 1064,
            "team_name": "Project HIVE Academia",
            "team_tag": "HIVE",
            "country_code": ""
        }))
        .unwrap();

        let player = Player::from(entry);
        assert!(!player.is_full());
        assert_eq!(player.country_code, None);
        let team = player.current_team.unwrap();
        assert_eq!(team.team_id, TeamId::new(1064));
        assert_eq!(team.mode_key.as_deref(), Some("mk8dx_150"));
        assert!(player.team_registered_at.is_some());
    }

    #[test]
    fn plain_entry_has_no_current_team() {
        let entry: PlayerEntry = serde_json::from_value(json!({
            "player_id": 12,
            "display_name": "Mars"
        }))
        .unwrap();
        assert_eq!(Player::from(entry).current_team, None);
    }

    #[test]
    fn full_team_resolves_logo_and_counts_members() {
        let record: TeamRecord = serde_json::from_value(json!({
            "id": 1064,
            "team_name": "Project HIVE Academia",
            "team_tag": "HIVE",
            "team_logo": "teams/1064/logo.png",
            "primary_team_id": 1000,
            "primary_team_name": "Project HIVE",
            "is_historical": 0,
            "rosters": {
                "150cc": {
                    "mode_key": "150cc",
                    "active": 1,
                    "members": [
                        { "player_id": 7922, "display_name": "Xyros", "team_leader": 1 },
                        { "player_id": 1655, "display_name": "Rollo" }
                    ]
                },
                "200cc": {
                    "mode_key": "200cc",
                    "active": 1,
                    "members": [
                        { "player_id": 7922, "display_name": "Xyros" }
                    ]
                }
            }
        }))
        .unwrap();

        let team = team_from_record(record, &client());
        assert_eq!(
            team.logo().unwrap().as_str(),
            "https://www.mariokartcentral.com/mkc/storage/teams/1064/logo.png"
        );
        assert_eq!(team.player_count, Some(2));
        assert_eq!(team.is_historical(), Some(false));
        assert_eq!(team.profile().unwrap().primary_team.as_ref().unwrap().id, TeamId::new(1000));
        assert!(team.rosters().unwrap().mktour_vs.is_none());
    }

    #[test]
    fn reported_player_count_wins() {
        let record: TeamRecord = serde_json::from_value(json!({
            "id": 9,
            "team_name": "Nine",
            "player_count": 14,
            "rosters": []
        }))
        .unwrap();

        let team = team_from_record(record, &client());
        assert_eq!(team.player_count, Some(14));
        assert!(team.rosters().unwrap().is_empty());
        assert_eq!(team.logo(), None);
    }
}
