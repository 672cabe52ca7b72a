// Player listing filters

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::QueryOptions;
use super::country::Country;

/// Which players a listing covers.
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
pub enum PlayerCategory {
    #[default]
    #[strum(to_string = "all", serialize = "All")]
    All,
    /// Players on an MK8DX 150cc roster.
    #[strum(to_string = "150cc", serialize = "Cc150")]
    Cc150,
    /// Players on an MK8DX 200cc roster.
    #[strum(to_string = "200cc", serialize = "Cc200")]
    Cc200,
    /// Players on an MKTour VS roster.
    #[strum(to_string = "mktour_vs", serialize = "mktour", serialize = "MkTour")]
    MkTour,
    /// Players without a team.
    #[strum(to_string = "shadow", serialize = "Shadow")]
    Shadow,
}

impl PlayerCategory {
    fn is_team_mode(self) -> bool {
        matches!(self, Self::Cc150 | Self::Cc200 | Self::MkTour)
    }
}

/// Sort order of a player listing.
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
pub enum PlayerOrder {
    #[default]
    #[strum(to_string = "NA", serialize = "NameAsc")]
    NameAsc,
    #[strum(to_string = "ND", serialize = "NameDesc")]
    NameDesc,
    /// Friend code of the category's game.
    #[strum(to_string = "FA", serialize = "FcAsc")]
    FcAsc,
    #[strum(to_string = "FD", serialize = "FcDesc")]
    FcDesc,
    #[strum(to_string = "SFA", serialize = "SwitchFcAsc")]
    SwitchFcAsc,
    #[strum(to_string = "SFD", serialize = "SwitchFcDesc")]
    SwitchFcDesc,
    #[strum(to_string = "TFA", serialize = "TourFcAsc")]
    TourFcAsc,
    #[strum(to_string = "TFD", serialize = "TourFcDesc")]
    TourFcDesc,
    #[strum(to_string = "3FA", serialize = "ThreeDsFcAsc")]
    ThreeDsFcAsc,
    #[strum(to_string = "3FD", serialize = "ThreeDsFcDesc")]
    ThreeDsFcDesc,
    #[strum(to_string = "UFA", serialize = "NnidAsc")]
    NnidAsc,
    #[strum(to_string = "UFD", serialize = "NnidDesc")]
    NnidDesc,
    /// Latest team registration.
    #[strum(to_string = "TA", serialize = "TeamRegistrationAsc")]
    TeamRegistrationAsc,
    #[strum(to_string = "TD", serialize = "TeamRegistrationDesc")]
    TeamRegistrationDesc,
    /// Player registration date.
    #[strum(to_string = "RA", serialize = "RegistrationAsc")]
    RegistrationAsc,
    #[strum(to_string = "RD", serialize = "RegistrationDesc")]
    RegistrationDesc,
}

impl PlayerOrder {
    /// Whether the registry documents this order for `category`.
    ///
    /// Undocumented pairs are still sent; the registry decides what to do.
    pub fn documented_for(self, category: PlayerCategory) -> bool {
        match self {
            Self::NameAsc
            | Self::NameDesc
            | Self::FcAsc
            | Self::FcDesc
            | Self::RegistrationAsc
            | Self::RegistrationDesc => true,
            Self::SwitchFcAsc
            | Self::SwitchFcDesc
            | Self::TourFcAsc
            | Self::TourFcDesc
            | Self::ThreeDsFcAsc
            | Self::ThreeDsFcDesc
            | Self::NnidAsc
            | Self::NnidDesc => !category.is_team_mode(),
            Self::TeamRegistrationAsc | Self::TeamRegistrationDesc => category.is_team_mode(),
        }
    }
}

/// Filters for a player listing. Unset fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlayerOptions {
    pub category: PlayerCategory,
    pub country: Country,
    pub order: PlayerOrder,
    pub search: String,
}

impl PlayerOptions {
    pub fn with_category(mut self, category: PlayerCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = country;
        self
    }

    pub fn with_order(mut self, order: PlayerOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

impl QueryOptions for PlayerOptions {
    type Category = PlayerCategory;

    fn category(&self) -> PlayerCategory {
        self.category
    }

    fn set_category(&mut self, category: PlayerCategory) {
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
            ("country", self.country.to_string()),
            ("search", self.search.clone()),
        ]
    }

    fn is_documented(&self) -> bool {
        self.order.documented_for(self.category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_match_registry_defaults() {
        let options = PlayerOptions::default();
        assert_eq!(options.category_segment(), "all");
        assert_eq!(
            options.query_pairs(),
            vec![
                ("order", "NA".to_owned()),
                ("country", "ZZ".to_owned()),
                ("search", String::new()),
            ]
        );
    }

    #[test]
    fn builders_touch_one_field() {
        let options = PlayerOptions::default()
            .with_order(PlayerOrder::TeamRegistrationAsc)
            .with_country(Country::Unknown);
        assert_eq!(options.category, PlayerCategory::All);
        assert_eq!(options.search, "");
        assert_eq!(options.query_pairs()[0].1, "TA");
        assert_eq!(options.query_pairs()[1].1, "XX");
    }

    #[test]
    fn category_tokens() {
        let tokens: Vec<&str> = PlayerCategory::iter().map(Into::into).collect();
        assert_eq!(tokens, vec!["all", "150cc", "200cc", "mktour_vs", "shadow"]);
        assert_eq!("MKTOUR".parse::<PlayerCategory>().unwrap(), PlayerCategory::MkTour);
        assert!("historical".parse::<PlayerCategory>().is_err());
    }

    #[test]
    fn order_tokens_parse_back() {
        for order in PlayerOrder::iter() {
            assert_eq!(order.to_string().parse::<PlayerOrder>().unwrap(), order);
        }
        assert_eq!("3fa".parse::<PlayerOrder>().unwrap(), PlayerOrder::ThreeDsFcAsc);
        assert_eq!("namedesc".parse::<PlayerOrder>().unwrap(), PlayerOrder::NameDesc);
    }

    #[test]
    fn documented_orders() {
        assert!(PlayerOrder::SwitchFcAsc.documented_for(PlayerCategory::Shadow));
        assert!(!PlayerOrder::SwitchFcAsc.documented_for(PlayerCategory::Cc150));
        assert!(PlayerOrder::TeamRegistrationDesc.documented_for(PlayerCategory::Cc200));
        assert!(!PlayerOrder::TeamRegistrationDesc.documented_for(PlayerCategory::All));
        assert!(PlayerOrder::RegistrationAsc.documented_for(PlayerCategory::MkTour));
    }
}
