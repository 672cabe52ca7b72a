// Registry API team endpoints

use tracing::debug;

use crate::error::Error;
use crate::registry::client::RegistryClient;
use crate::registry::models::{ListResponse, TeamEntry, TeamRecord};

impl RegistryClient {
    /// Fetch the full record of one team, rosters included.
    ///
    /// `GET /api/registry/teams/{id}`
    pub async fn get_team(&self, id: u64) -> Result<TeamRecord, Error> {
        let url = self.team_url(id)?;
        debug!(id, "fetching team");
        self.get_record("team", id, url).await
    }

    /// List teams in a category, filtered by the given query parameters.
    ///
    /// `GET /api/registry/teams/category/{category}?order=..&language=..&search=..`
    pub async fn list_teams(
        &self,
        category: &str,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TeamEntry>, Error> {
        let url = self.list_url("teams", category, params)?;
        debug!(category, "listing teams");
        self.get_list(url).await
    }
}
