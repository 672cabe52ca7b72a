// Registry API player endpoints

use tracing::debug;

use crate::error::Error;
use crate::registry::client::RegistryClient;
use crate::registry::models::{ListResponse, PlayerEntry, PlayerRecord};

impl RegistryClient {
    /// Fetch the full record of one player.
    ///
    /// `GET /api/registry/players/{id}`
    pub async fn get_player(&self, id: u64) -> Result<PlayerRecord, Error> {
        let url = self.player_url(id)?;
        debug!(id, "fetching player");
        self.get_record("player", id, url).await
    }

    /// List players in a category, filtered by the given query parameters.
    ///
    /// `GET /api/registry/players/category/{category}?order=..&country=..&search=..`
    pub async fn list_players(
        &self,
        category: &str,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<PlayerEntry>, Error> {
        let url = self.list_url("players", category, params)?;
        debug!(category, "listing players");
        self.get_list(url).await
    }
}
