//! Player listing handler.

use futures::future::try_join_all;
use tabled::Tabled;

use mkc_core::{Player, PlayerOptions, Players, Query, RegistryClient};

use crate::cli::{GlobalOpts, PlayersArgs};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Registered")]
    registered: String,
    #[tabled(rename = "Switch FC")]
    switch_fc: String,
    #[tabled(rename = "Banned")]
    banned: String,
}

impl From<&Player> for PlayerRow {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            country: output::or_dash(p.country_code.as_deref()),
            team: output::or_dash(p.current_team.as_ref().map(|t| t.team_tag.as_str())),
            registered: util::date(p.registered_at_human.as_deref(), p.registered_at.as_ref()),
            switch_fc: output::or_dash(p.switch_fc.as_deref()),
            banned: util::loaded_flag(p.is_banned()),
        }
    }
}

// ── Options ─────────────────────────────────────────────────────────

/// The positional query seeds the options; explicit flags override it.
fn options(args: &PlayersArgs) -> Result<PlayerOptions, CliError> {
    let mut options = args
        .query
        .as_deref()
        .map_or_else(PlayerOptions::default, |q| Query::from(q).resolve());

    if let Some(ref raw) = args.category {
        options.category = util::parse_flag("category", raw)?;
    }
    if let Some(ref raw) = args.country {
        options.country = util::parse_flag("country", raw)?;
    }
    if let Some(ref raw) = args.order {
        options.order = util::parse_flag("order", raw)?;
    }
    if let Some(ref search) = args.search {
        options.search.clone_from(search);
    }
    Ok(options)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &RegistryClient,
    args: PlayersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let options = options(&args)?;
    let mut players = Players::fetch(client, options).await?;

    if args.load {
        try_join_all(players.iter_mut().map(|p| p.load(client))).await?;
    }

    let out = output::render_list(
        &global.format(),
        &*players,
        |p| PlayerRow::from(p),
        |p| p.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
