// Team listing filters

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::QueryOptions;

/// Which teams a listing covers.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum TeamCategory {
    /// Every active team. The registry has no separate "all" listing.
    #[default]
    #[strum(to_string = "active", serialize = "Active", serialize = "all")]
    Active,
    #[strum(to_string = "150cc", serialize = "Cc150")]
    Cc150,
    #[strum(to_string = "200cc", serialize = "Cc200")]
    Cc200,
    #[strum(to_string = "mktour_vs", serialize = "mktour", serialize = "MkTour")]
    MkTour,
    /// Disbanded teams.
    #[strum(to_string = "historical", serialize = "Historical")]
    Historical,
}

/// `language=` parameter of a team listing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[strum(to_string = "all", serialize = "All")]
    All,
    English,
    French,
    German,
    Portuguese,
    Spanish,
    #[strum(to_string = "other", serialize = "Other")]
    Other,
}

/// Sort order of a team listing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum TeamOrder {
    #[default]
    #[strum(to_string = "NA", serialize = "NameAsc")]
    NameAsc,
    #[strum(to_string = "ND", serialize = "NameDesc")]
    NameDesc,
    /// Latest roster registration.
    #[strum(to_string = "RA", serialize = "RegistrationAsc")]
    RegistrationAsc,
    #[strum(to_string = "RD", serialize = "RegistrationDesc")]
    RegistrationDesc,
    #[strum(to_string = "SA", serialize = "StatusAsc")]
    StatusAsc,
    #[strum(to_string = "SD", serialize = "StatusDesc")]
    StatusDesc,
}

impl TeamOrder {
    /// Whether the registry documents this order for `category`.
    pub fn documented_for(self, category: TeamCategory) -> bool {
        match self {
            Self::RegistrationAsc | Self::RegistrationDesc => matches!(
                category,
                TeamCategory::Cc150 | TeamCategory::Cc200 | TeamCategory::MkTour
            ),
            Self::NameAsc | Self::NameDesc | Self::StatusAsc | Self::StatusDesc => true,
        }
    }
}

/// Filters for a team listing. Unset fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TeamOptions {
    pub category: TeamCategory,
    pub language: Language,
    pub order: TeamOrder,
    pub search: String,
}

impl TeamOptions {
    pub fn with_category(mut self, category: TeamCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_order(mut self, order: TeamOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

impl QueryOptions for TeamOptions {
    type Category = TeamCategory;

    fn category(&self) -> TeamCategory {
        self.category
    }

    fn set_category(&mut self, category: TeamCategory) {
        self.category = category;
    }

    fn set_search(&mut self, search: String) {
        self.search = search;
    }

    fn category_segment(&self) -> &'static str {
        self.category.into()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("order", self.order.to_string()),
            ("language", self.language.to_string()),
            ("search", self.search.clone()),
        ]
    }

    fn is_documented(&self) -> bool {
        self.order.documented_for(self.category)
    }
}
