// ── Filtered listings ──
//
// A `Collection` is one listing response: shallow entities in response
// order, the count the registry reported, and the options that produced
// them. Items can be upgraded in place with `load()` but not removed or
// reordered.

use std::future::Future;
use std::ops::{Deref, Index, IndexMut};

use tracing::{debug, warn};

use mkc_api::RegistryClient;

use crate::error::CoreError;
use crate::model::{EntityKind, Player, Team};
use crate::options::{PlayerOptions, Query, QueryOptions, TeamOptions};

/// An entity type with a category listing endpoint.
pub trait Listable: Sized {
    type Options: QueryOptions + Send + Sync;

    const KIND: EntityKind;

    /// Issue one listing request. Returns the reported count and the entries.
    fn list(
        client: &RegistryClient,
        options: &Self::Options,
    ) -> impl Future<Output = Result<(u32, Vec<Self>), CoreError>> + Send;
}

fn borrowed_pairs<'a>(pairs: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    pairs.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

impl Listable for Player {
    type Options = PlayerOptions;

    const KIND: EntityKind = EntityKind::Player;

    async fn list(
        client: &RegistryClient,
        options: &PlayerOptions,
    ) -> Result<(u32, Vec<Self>), CoreError> {
        let pairs = options.query_pairs();
        let response = client
            .list_players(options.category_segment(), &borrowed_pairs(&pairs))
            .await?;
        Ok((
            response.count,
            response.data.into_iter().map(Self::from).collect(),
        ))
    }
}

impl Listable for Team {
    type Options = TeamOptions;

    const KIND: EntityKind = EntityKind::Team;

    async fn list(
        client: &RegistryClient,
        options: &TeamOptions,
    ) -> Result<(u32, Vec<Self>), CoreError> {
        let pairs = options.query_pairs();
        let response = client
            .list_teams(options.category_segment(), &borrowed_pairs(&pairs))
            .await?;
        Ok((
            response.count,
            response.data.into_iter().map(Self::from).collect(),
        ))
    }
}

// ── Collection ─────────────────────────────────────────────────────

/// One page of a category listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Listable> {
    items: Vec<T>,
    count: u32,
    options: T::Options,
}

pub type Players = Collection<Player>;
pub type Teams = Collection<Team>;

impl<T: Listable> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            options: T::Options::default(),
        }
    }
}

impl<T: Listable> Collection<T> {
    /// Empty collection with default options. Nothing is fetched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty collection remembering `options` for a later [`refresh`](Self::refresh).
    pub fn with_options(options: T::Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Fetch one listing.
    ///
    /// Accepts full options, a category, a search string, or
    /// [`Query::Default`].
    pub async fn fetch(
        client: &RegistryClient,
        query: impl Into<Query<T::Options>>,
    ) -> Result<Self, CoreError> {
        let options = query.into().resolve();
        let (count, items) = request::<T>(client, &options).await?;
        Ok(Self {
            items,
            count,
            options,
        })
    }

    /// Re-run the listing with the current options, replacing the items.
    ///
    /// On error the collection is unchanged.
    pub async fn refresh(&mut self, client: &RegistryClient) -> Result<(), CoreError> {
        let (count, items) = request::<T>(client, &self.options).await?;
        self.replace(count, items);
        Ok(())
    }

    /// Switch to `options` and re-run the listing.
    ///
    /// On error neither the items nor the options change.
    pub async fn refresh_with(
        &mut self,
        client: &RegistryClient,
        options: T::Options,
    ) -> Result<(), CoreError> {
        let (count, items) = request::<T>(client, &options).await?;
        self.options = options;
        self.replace(count, items);
        Ok(())
    }

    fn replace(&mut self, count: u32, items: Vec<T>) {
        self.items.clear();
        self.items.extend(items);
        self.count = count;
    }

    /// Number of results the registry reported.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn options(&self) -> &T::Options {
        &self.options
    }

    /// Options used by the next [`refresh`](Self::refresh).
    pub fn options_mut(&mut self) -> &mut T::Options {
        &mut self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

async fn request<T: Listable>(
    client: &RegistryClient,
    options: &T::Options,
) -> Result<(u32, Vec<T>), CoreError> {
    if !options.is_documented() {
        debug!(
            kind = %T::KIND,
            category = %options.category(),
            ?options,
            "order is not documented for this category"
        );
    }

    let (count, items) = T::list(client, options).await?;
    debug!(kind = %T::KIND, count, received = items.len(), "listing fetched");

    if usize::try_from(count).ok() != Some(items.len()) {
        warn!(
            kind = %T::KIND,
            reported = count,
            received = items.len(),
            "listing count differs from entries received"
        );
    }
    Ok((count, items))
}

// ── Access ─────────────────────────────────────────────────────────

impl<T: Listable> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Listable> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: Listable> IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T: Listable> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Listable> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T: Listable> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PlayerCategory, TeamCategory};

    #[test]
    fn new_collection_is_empty_with_default_options() {
        let players = Players::new();
        assert!(players.is_empty());
        assert_eq!(players.count(), 0);
        assert_eq!(players.options(), &PlayerOptions::default());
    }

    #[test]
    fn with_options_keeps_them_for_refresh() {
        let mut teams = Teams::with_options(
            TeamOptions::default().with_category(TeamCategory::Historical),
        );
        assert_eq!(teams.options().category, TeamCategory::Historical);

        teams.options_mut().category = TeamCategory::Cc200;
        assert_eq!(teams.options().category_segment(), "200cc");
    }

    #[test]
    fn borrowed_pairs_keep_order() {
        let pairs = PlayerOptions::default()
            .with_category(PlayerCategory::Shadow)
            .with_search("Mars")
            .query_pairs();
        assert_eq!(
            borrowed_pairs(&pairs),
            vec![("order", "NA"), ("country", "ZZ"), ("search", "Mars")]
        );
    }
}
