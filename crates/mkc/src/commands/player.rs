//! Single-player detail handler.

use std::fmt::Write as _;

use futures::future::try_join_all;
use serde::Serialize;

use mkc_core::{Player, RegistryClient, Team};

use crate::cli::{GlobalOpts, PlayerArgs};
use crate::error::CliError;
use crate::output;

use super::util;

/// A player plus, on request, the teams it is rostered on.
#[derive(Serialize)]
struct PlayerReport<'a> {
    #[serde(flatten)]
    player: &'a Player,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    teams: Vec<Team>,
}

fn detail(report: &PlayerReport<'_>) -> String {
    let p = report.player;
    let mut lines = vec![
        format!("ID:          {}", p.id),
        format!("Name:        {}", p.name),
        format!(
            "Country:     {}",
            output::or_dash(p.country_name.as_deref().or(p.country_code.as_deref()))
        ),
        format!(
            "Registered:  {}",
            util::date(p.registered_at_human.as_deref(), p.registered_at.as_ref())
        ),
        format!("Switch FC:   {}", output::or_dash(p.switch_fc.as_deref())),
    ];
    if let Some(fc) = p.mktour_fc.as_deref() {
        lines.push(format!("Tour FC:     {fc}"));
    }
    if let Some(fc) = p.fc_3ds.as_deref() {
        lines.push(format!("3DS FC:      {fc}"));
    }
    if let Some(nnid) = p.nnid.as_deref() {
        lines.push(format!("NNID:        {nnid}"));
    }

    if let Some(profile) = p.profile() {
        lines.push(format!(
            "Region:      {}",
            output::or_dash(profile.region.as_deref())
        ));
        lines.push(format!(
            "Discord:     {}",
            output::or_dash(profile.discord_tag.as_deref())
        ));
        lines.push(format!("Banned:      {}", util::loaded_flag(Some(profile.is_banned))));
        if let Some(reason) = profile.ban_reason.as_deref() {
            lines.push(format!("Ban reason:  {reason}"));
        }
        lines.push(format!(
            "Supporter:   {}",
            util::loaded_flag(Some(profile.roles.supporter))
        ));
        if let Some(message) = profile.profile_message.as_deref() {
            lines.push(format!("Message:     {message}"));
        }

        if !profile.current_teams.is_empty() {
            lines.push(String::new());
            lines.push("Teams:".into());
            for t in &profile.current_teams {
                let mut line = format!("  [{}] {} ({})", t.team_tag, t.team_name, t.team_id);
                if let Some(mode) = t.mode_title.as_deref().or(t.mode_key.as_deref()) {
                    let _ = write!(line, " {mode}");
                }
                lines.push(line);
            }
        }
    }

    if !report.teams.is_empty() {
        lines.push(String::new());
        lines.push("Team details:".into());
    }
    for team in &report.teams {
        lines.push(format!(
            "  {} ({}): {} players, founded {}",
            team.name,
            team.id,
            team.player_count
                .map_or_else(|| "?".into(), |n| n.to_string()),
            util::date(team.founding_date_human.as_deref(), team.founding_date.as_ref()),
        ));
    }

    lines.join("\n")
}

pub async fn handle(
    client: &RegistryClient,
    args: PlayerArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let player = Player::fetch(client, args.id).await?;

    let teams = if args.teams {
        let current = player.current_teams().unwrap_or_default();
        try_join_all(current.iter().map(|t| t.get_team(client))).await?
    } else {
        Vec::new()
    };

    let report = PlayerReport {
        player: &player,
        teams,
    };
    let out = output::render_single(&global.format(), &report, detail, |r| {
        r.player.id.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
