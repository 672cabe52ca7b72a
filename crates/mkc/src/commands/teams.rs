//! Team listing handler.

use futures::future::try_join_all;
use tabled::Tabled;

use mkc_core::{Query, RegistryClient, Team, TeamOptions, Teams};

use crate::cli::{GlobalOpts, TeamsArgs};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Players")]
    players: String,
    #[tabled(rename = "Founded")]
    founded: String,
}

impl From<&Team> for TeamRow {
    fn from(t: &Team) -> Self {
        Self {
            id: t.id.to_string(),
            tag: t.tag.clone(),
            name: t.name.clone(),
            status: output::or_dash(t.status.as_deref()),
            players: t
                .player_count
                .map_or_else(|| "-".into(), |n| n.to_string()),
            founded: util::date(t.founding_date_human.as_deref(), t.founding_date.as_ref()),
        }
    }
}

fn options(args: &TeamsArgs) -> Result<TeamOptions, CliError> {
    let mut options = args
        .query
        .as_deref()
        .map_or_else(TeamOptions::default, |q| Query::from(q).resolve());

    if let Some(ref raw) = args.category {
        options.category = util::parse_flag("category", raw)?;
    }
    if let Some(ref raw) = args.language {
        options.language = util::parse_flag("language", raw)?;
    }
    if let Some(ref raw) = args.order {
        options.order = util::parse_flag("order", raw)?;
    }
    if let Some(ref search) = args.search {
        options.search.clone_from(search);
    }
    Ok(options)
}

pub async fn handle(
    client: &RegistryClient,
    args: TeamsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut teams = Teams::fetch(client, options(&args)?).await?;

    if args.load {
        try_join_all(teams.iter_mut().map(|t| t.load(client))).await?;
    }

    let out = output::render_list(&global.format(), &*teams, |t| TeamRow::from(t), |t| {
        t.id.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mkc_core::{Language, TeamCategory, TeamOrder};

    fn args(query: Option<&str>) -> TeamsArgs {
        TeamsArgs {
            query: query.map(Into::into),
            category: None,
            language: None,
            order: None,
            search: None,
            load: false,
        }
    }

    #[test]
    fn positional_category() {
        let options = options(&args(Some("historical"))).unwrap();
        assert_eq!(options.category, TeamCategory::Historical);
        assert!(options.search.is_empty());
    }

    #[test]
    fn positional_search_with_flags() {
        let mut a = args(Some("HIVE"));
        a.language = Some("german".into());
        a.order = Some("rd".into());
        let options = options(&a).unwrap();
        assert_eq!(options.search, "HIVE");
        assert_eq!(options.language, Language::German);
        assert_eq!(options.order, TeamOrder::RegistrationDesc);
    }

    #[test]
    fn bad_language() {
        let mut a = args(None);
        a.language = Some("klingon".into());
        assert!(matches!(options(&a), Err(CliError::Validation { .. })));
    }
}
