// ── Listing filter options ──
//
// Typed filters for the category listings. Every enum renders to the exact
// token the registry expects and parses back from that token or from its
// variant name, ignoring case.

pub mod country;
pub mod player;
pub mod team;

use std::fmt;
use std::str::FromStr;

pub use country::Country;
pub use player::{PlayerCategory, PlayerOptions, PlayerOrder};
pub use team::{Language, TeamCategory, TeamOptions, TeamOrder};

/// A complete set of listing filters for one collection.
pub trait QueryOptions: Default + Clone + fmt::Debug + PartialEq {
    type Category: FromStr + Copy + PartialEq + Eq + fmt::Debug + fmt::Display;

    fn category(&self) -> Self::Category;
    fn set_category(&mut self, category: Self::Category);
    fn set_search(&mut self, search: String);

    /// Path segment after `.../category/`.
    fn category_segment(&self) -> &'static str;

    /// Query parameters in request order. `search` is always present.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Whether the registry documents this order for this category.
    fn is_documented(&self) -> bool {
        true
    }
}

/// What a caller may hand to a collection fetch.
///
/// Strings are first tried as a category token and otherwise become a
/// search term against the default category.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Query<O: QueryOptions> {
    #[default]
    Default,
    Options(O),
    Category(O::Category),
    Search(String),
}

impl<O: QueryOptions> Query<O> {
    /// The concrete options this query stands for.
    pub fn resolve(self) -> O {
        match self {
            Self::Default => O::default(),
            Self::Options(options) => options,
            Self::Category(category) => {
                let mut options = O::default();
                options.set_category(category);
                options
            }
            Self::Search(search) => {
                let mut options = O::default();
                options.set_search(search);
                options
            }
        }
    }
}

impl<O: QueryOptions> From<&str> for Query<O> {
    fn from(raw: &str) -> Self {
        // Categories match trimmed; a search keeps the caller's text.
        let token = raw.trim();
        if token.is_empty() {
            return Self::Default;
        }
        match token.parse::<O::Category>() {
            Ok(category) => Self::Category(category),
            Err(_) => Self::Search(raw.to_owned()),
        }
    }
}

impl<O: QueryOptions> From<String> for Query<O> {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl<O: QueryOptions> From<Option<O>> for Query<O> {
    fn from(options: Option<O>) -> Self {
        options.map_or(Self::Default, Self::Options)
    }
}

impl From<PlayerOptions> for Query<PlayerOptions> {
    fn from(options: PlayerOptions) -> Self {
        Self::Options(options)
    }
}

impl From<PlayerCategory> for Query<PlayerOptions> {
    fn from(category: PlayerCategory) -> Self {
        Self::Category(category)
    }
}

impl From<TeamOptions> for Query<TeamOptions> {
    fn from(options: TeamOptions) -> Self {
        Self::Options(options)
    }
}

impl From<TeamCategory> for Query<TeamOptions> {
    fn from(category: TeamCategory) -> Self {
        Self::Category(category)
    }
}
