//! Single-team detail handler, rosters included.

use std::collections::BTreeMap;

use futures::future::try_join_all;
use serde::Serialize;
use tabled::Tabled;

use mkc_core::{Member, Player, PlayerId, RegistryClient, Roster, RosterMode, Team};

use crate::cli::{GlobalOpts, TeamArgs};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize)]
struct TeamReport<'a> {
    #[serde(flatten)]
    team: &'a Team,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    players: Vec<Player>,
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Since")]
    since: String,
    #[tabled(rename = "Leader")]
    leader: String,
}

impl From<&Member> for MemberRow {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            country: output::or_dash(m.country_code.as_deref()),
            since: util::date(
                m.registered_since_human.as_deref(),
                m.registered_since.as_ref(),
            ),
            leader: if m.is_leader { "*".into() } else { String::new() },
        }
    }
}

fn roster_block(mode: RosterMode, roster: &Roster) -> String {
    let title = roster.mode_title.as_deref().unwrap_or(roster.mode_key.as_str());
    let name = roster
        .name
        .as_deref()
        .map(|n| format!(" \"{n}\""))
        .unwrap_or_default();
    let rows: Vec<MemberRow> = roster.members.iter().map(MemberRow::from).collect();
    format!(
        "{title} [{mode}]{name}: {} members{}\n{}",
        roster.members.len(),
        if roster.is_active { "" } else { " (inactive)" },
        output::render_table(&rows)
    )
}

/// Rosters to show: one mode when requested, otherwise every roster.
fn selected_rosters(team: &Team, mode: Option<RosterMode>) -> Vec<(RosterMode, &Roster)> {
    let Some(rosters) = team.rosters() else {
        return Vec::new();
    };
    match mode {
        Some(mode) => rosters.get(mode).map(|r| (mode, r)).into_iter().collect(),
        None => rosters.iter().collect(),
    }
}

fn detail(report: &TeamReport<'_>, mode: Option<RosterMode>) -> String {
    let t = report.team;
    let mut lines = vec![
        format!("ID:          {}", t.id),
        format!("Name:        {}", t.name),
        format!("Tag:         {}", t.tag),
        format!("Status:      {}", output::or_dash(t.status.as_deref())),
        format!(
            "Recruiting:  {}",
            output::or_dash(t.recruitment_status.as_deref())
        ),
        format!(
            "Founded:     {}",
            util::date(t.founding_date_human.as_deref(), t.founding_date.as_ref())
        ),
        format!(
            "Players:     {}",
            t.player_count.map_or_else(|| "-".into(), |n| n.to_string())
        ),
        format!("Language:    {}", output::or_dash(t.main_language())),
    ];
    if let Some(logo) = t.logo() {
        lines.push(format!("Logo:        {logo}"));
    }
    if let Some(profile) = t.profile() {
        if profile.is_historical {
            lines.push("Historical:  yes".into());
        }
        if let Some(primary) = &profile.primary_team {
            lines.push(format!("Primary:     {} ({})", primary.name, primary.id));
        }
        for secondary in &profile.secondary_teams {
            lines.push(format!("Secondary:   {} ({})", secondary.name, secondary.id));
        }
    }

    for (mode, roster) in selected_rosters(t, mode) {
        lines.push(String::new());
        lines.push(roster_block(mode, roster));
    }

    if let Some(description) = t.description() {
        lines.push(String::new());
        lines.push(description.to_owned());
    }

    lines.join("\n")
}

pub async fn handle(
    client: &RegistryClient,
    args: TeamArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mode: Option<RosterMode> = args
        .mode
        .as_deref()
        .map(|raw| util::parse_flag("mode", raw))
        .transpose()?;

    let team = Team::fetch(client, args.id).await?;

    if let Some(mode) = mode {
        if team.roster(mode).is_none() {
            return Err(CliError::invalid(
                "mode",
                format!("team {} has no {mode} roster", team.id),
            ));
        }
    }

    let players = if args.resolve {
        // Players rostered in several modes are fetched once.
        let members: BTreeMap<PlayerId, &Member> = selected_rosters(&team, mode)
            .into_iter()
            .flat_map(|(_, roster)| roster.members.iter().map(|m| (m.id, m)))
            .collect();
        try_join_all(members.values().map(|m| m.get_player(client))).await?
    } else {
        Vec::new()
    };

    let report = TeamReport {
        team: &team,
        players,
    };
    let out = output::render_single(
        &global.format(),
        &report,
        |r| detail(r, mode),
        |r| r.team.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn team() -> Team {
        serde_json::from_value(serde_json::json!({
            "id": 1064,
            "name": "Project HIVE Academia",
            "tag": "HIVE",
            "founding_date_human": "Oct 22, 2020",
            "player_count": 2,
            "profile": {
                "category": null,
                "description": null,
                "main_language": "German",
                "logo": null,
                "is_historical": false,
                "primary_team": null,
                "secondary_teams": [],
                "rosters": {
                    "150cc": {
                        "mode_key": "mk8dx_150",
                        "mode_title": "Mario Kart 8 Deluxe 150cc",
                        "name": null,
                        "is_user_member": false,
                        "is_active": true,
                        "members": [{
                            "id": 7922,
                            "name": "Xyros",
                            "is_leader": true
                        }]
                    },
                    "200cc": null,
                    "mktour_vs": null
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn detail_embeds_member_table() {
        let team = team();
        let out = detail(
            &TeamReport {
                team: &team,
                players: Vec::new(),
            },
            None,
        );
        assert!(out.contains("Project HIVE Academia"));
        assert!(out.contains("Oct 22, 2020"));
        assert!(out.contains("Xyros"));
        assert!(out.contains("[150cc]"));
    }

    #[test]
    fn mode_filter_selects_one_roster() {
        let team = team();
        assert_eq!(selected_rosters(&team, Some(RosterMode::Cc150)).len(), 1);
        assert!(selected_rosters(&team, Some(RosterMode::Cc200)).is_empty());
        assert_eq!(selected_rosters(&team, None).len(), 1);
    }
}
