// Country filter for player listings.
//
// Codes follow the registry's own country list, which is not a complete
// ISO 3166 table.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// `country=` parameter of a player listing.
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
pub enum Country {
    /// Every country.
    #[default]
    #[strum(to_string = "ZZ", serialize = "All")]
    All,
    #[strum(to_string = "AF", serialize = "Afghanistan")]
    Afghanistan,
    #[strum(to_string = "AL", serialize = "Albania")]
    Albania,
    #[strum(to_string = "DZ", serialize = "Algeria")]
    Algeria,
    #[strum(to_string = "AS", serialize = "AmericanSamoa")]
    AmericanSamoa,
    #[strum(to_string = "AD", serialize = "Andorra")]
    Andorra,
    #[strum(to_string = "AQ", serialize = "Antarctica")]
    Antarctica,
    #[strum(to_string = "AR", serialize = "Argentina")]
    Argentina,
    #[strum(to_string = "AM", serialize = "Armenia")]
    Armenia,
    #[strum(to_string = "AW", serialize = "Aruba")]
    Aruba,
    #[strum(to_string = "AU", serialize = "Australia")]
    Australia,
    #[strum(to_string = "AT", serialize = "Austria")]
    Austria,
    #[strum(to_string = "AZ", serialize = "Azerbaijan")]
    Azerbaijan,
    #[strum(to_string = "BS", serialize = "Bahamas")]
    Bahamas,
    #[strum(to_string = "BH", serialize = "Bahrain")]
    Bahrain,
    #[strum(to_string = "BD", serialize = "Bangladesh")]
    Bangladesh,
    #[strum(to_string = "BB", serialize = "Barbados")]
    Barbados,
    #[strum(to_string = "BY", serialize = "Belarus")]
    Belarus,
    #[strum(to_string = "BE", serialize = "Belgium")]
    Belgium,
    #[strum(to_string = "BO", serialize = "Bolivia")]
    Bolivia,
    #[strum(to_string = "BQ", serialize = "BonaireSintEustatiusAndSaba")]
    BonaireSintEustatiusAndSaba,
    #[strum(to_string = "BA", serialize = "BosniaAndHerzegovina")]
    BosniaAndHerzegovina,
    #[strum(to_string = "BR", serialize = "Brazil")]
    Brazil,
    #[strum(to_string = "IO", serialize = "BritishIndianOceanTerritory")]
    BritishIndianOceanTerritory,
    #[strum(to_string = "CA", serialize = "Canada")]
    Canada,
    #[strum(to_string = "CL", serialize = "Chile")]
    Chile,
    #[strum(to_string = "CN", serialize = "China")]
    China,
    #[strum(to_string = "CO", serialize = "Colombia")]
    Colombia,
    #[strum(to_string = "CG", serialize = "Congo")]
    Congo,
    #[strum(to_string = "CR", serialize = "CostaRica")]
    CostaRica,
    #[strum(to_string = "HR", serialize = "Croatia")]
    Croatia,
    #[strum(to_string = "CU", serialize = "Cuba")]
    Cuba,
    #[strum(to_string = "CY", serialize = "Cyprus")]
    Cyprus,
    #[strum(to_string = "CZ", serialize = "CzechRepublic")]
    CzechRepublic,
    #[strum(to_string = "DK", serialize = "Denmark")]
    Denmark,
    #[strum(to_string = "DO", serialize = "DominicanRepublic")]
    DominicanRepublic,
    #[strum(to_string = "EC", serialize = "Ecuador")]
    Ecuador,
    #[strum(to_string = "EG", serialize = "Egypt")]
    Egypt,
    #[strum(to_string = "SV", serialize = "ElSalvador")]
    ElSalvador,
    #[strum(to_string = "EE", serialize = "Estonia")]
    Estonia,
    #[strum(to_string = "FI", serialize = "Finland")]
    Finland,
    #[strum(to_string = "FR", serialize = "France")]
    France,
    #[strum(to_string = "PF", serialize = "FrenchPolynesia")]
    FrenchPolynesia,
    #[strum(to_string = "GE", serialize = "Georgia")]
    Georgia,
    #[strum(to_string = "DE", serialize = "Germany")]
    Germany,
    #[strum(to_string = "GR", serialize = "Greece")]
    Greece,
    #[strum(to_string = "GU", serialize = "Guam")]
    Guam,
    #[strum(to_string = "GT", serialize = "Guatemala")]
    Guatemala,
    #[strum(to_string = "HN", serialize = "Honduras")]
    Honduras,
    #[strum(to_string = "HK", serialize = "HongKong")]
    HongKong,
    #[strum(to_string = "HU", serialize = "Hungary")]
    Hungary,
    #[strum(to_string = "IS", serialize = "Iceland")]
    Iceland,
    #[strum(to_string = "IN", serialize = "India")]
    India,
    #[strum(to_string = "ID", serialize = "Indonesia")]
    Indonesia,
    #[strum(to_string = "IE", serialize = "Ireland")]
    Ireland,
    #[strum(to_string = "IL", serialize = "Israel")]
    Israel,
    #[strum(to_string = "IT", serialize = "Italy")]
    Italy,
    #[strum(to_string = "JM", serialize = "Jamaica")]
    Jamaica,
    #[strum(to_string = "JP", serialize = "Japan")]
    Japan,
    #[strum(to_string = "JE", serialize = "Jersey")]
    Jersey,
    #[strum(to_string = "JO", serialize = "Jordan")]
    Jordan,
    #[strum(to_string = "KE", serialize = "Kenya")]
    Kenya,
    #[strum(to_string = "LV", serialize = "Latvia")]
    Latvia,
    #[strum(to_string = "LB", serialize = "Lebanon")]
    Lebanon,
    #[strum(to_string = "LU", serialize = "Luxembourg")]
    Luxembourg,
    #[strum(to_string = "MO", serialize = "Macao")]
    Macao,
    #[strum(to_string = "MG", serialize = "Madagascar")]
    Madagascar,
    #[strum(to_string = "MY", serialize = "Malaysia")]
    Malaysia,
    #[strum(to_string = "MT", serialize = "Malta")]
    Malta,
    #[strum(to_string = "MX", serialize = "Mexico")]
    Mexico,
    #[strum(to_string = "MA", serialize = "Morocco")]
    Morocco,
    #[strum(to_string = "NL", serialize = "Netherlands")]
    Netherlands,
    #[strum(to_string = "NC", serialize = "NewCaledonia")]
    NewCaledonia,
    #[strum(to_string = "NZ", serialize = "NewZealand")]
    NewZealand,
    #[strum(to_string = "NI", serialize = "Nicaragua")]
    Nicaragua,
    #[strum(to_string = "NE", serialize = "Niger")]
    Niger,
    #[strum(to_string = "NO", serialize = "Norway")]
    Norway,
    #[strum(to_string = "PA", serialize = "Panama")]
    Panama,
    #[strum(to_string = "PY", serialize = "Paraguay")]
    Paraguay,
    #[strum(to_string = "PE", serialize = "Peru")]
    Peru,
    #[strum(to_string = "PH", serialize = "Philippines")]
    Philippines,
    #[strum(to_string = "PL", serialize = "Poland")]
    Poland,
    #[strum(to_string = "PT", serialize = "Portugal")]
    Portugal,
    #[strum(to_string = "PR", serialize = "PuertoRico")]
    PuertoRico,
    #[strum(to_string = "RO", serialize = "Romania")]
    Romania,
    #[strum(to_string = "RU", serialize = "Russia")]
    Russia,
    #[strum(to_string = "RE", serialize = "Reunion")]
    Reunion,
    #[strum(to_string = "SA", serialize = "SaudiArabia")]
    SaudiArabia,
    #[strum(to_string = "LS", serialize = "SierraLeone")]
    SierraLeone,
    #[strum(to_string = "SG", serialize = "Singapore")]
    Singapore,
    #[strum(to_string = "SK", serialize = "Slovakia")]
    Slovakia,
    #[strum(to_string = "SI", serialize = "Slovenia")]
    Slovenia,
    #[strum(to_string = "ZA", serialize = "SouthAfrica")]
    SouthAfrica,
    #[strum(to_string = "GS", serialize = "SouthGeorgiaAndTheSouthSandwichIslands")]
    SouthGeorgiaAndTheSouthSandwichIslands,
    #[strum(to_string = "KR", serialize = "SouthKorea")]
    SouthKorea,
    #[strum(to_string = "ES", serialize = "Spain")]
    Spain,
    #[strum(to_string = "LK", serialize = "SriLanka")]
    SriLanka,
    #[strum(to_string = "SD", serialize = "Sudan")]
    Sudan,
    #[strum(to_string = "SE", serialize = "Sweden")]
    Sweden,
    #[strum(to_string = "CH", serialize = "Switzerland")]
    Switzerland,
    #[strum(to_string = "TW", serialize = "Taiwan")]
    Taiwan,
    #[strum(to_string = "TH", serialize = "Thailand")]
    Thailand,
    #[strum(to_string = "TT", serialize = "TrinidadAndTobago")]
    TrinidadAndTobago,
    #[strum(to_string = "TN", serialize = "Tunisia")]
    Tunisia,
    #[strum(to_string = "TR", serialize = "Turkey")]
    Turkey,
    #[strum(to_string = "VI", serialize = "USVirginIslands")]
    USVirginIslands,
    #[strum(to_string = "UA", serialize = "Ukraine")]
    Ukraine,
    #[strum(to_string = "AE", serialize = "UnitedArabEmirates")]
    UnitedArabEmirates,
    #[strum(to_string = "GB", serialize = "UnitedKingdom")]
    UnitedKingdom,
    #[strum(to_string = "US", serialize = "UnitedStates")]
    UnitedStates,
    /// Players without a country set.
    #[strum(to_string = "XX", serialize = "Unknown")]
    Unknown,
    #[strum(to_string = "UY", serialize = "Uruguay")]
    Uruguay,
    #[strum(to_string = "VE", serialize = "Venezuela")]
    Venezuela,
    #[strum(to_string = "ZW", serialize = "Zimbabwe")]
    Zimbabwe,
}

impl Country {
    /// The two-letter code sent to the registry.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_and_names_parse() {
        assert_eq!(Country::default().code(), "ZZ");
        assert_eq!("jp".parse::<Country>().unwrap(), Country::Japan);
        assert_eq!("Germany".parse::<Country>().unwrap(), Country::Germany);
        assert_eq!("unknown".parse::<Country>().unwrap().code(), "XX");
        assert!("Atlantis".parse::<Country>().is_err());
    }

    #[test]
    fn every_code_round_trips() {
        for country in Country::iter() {
            assert_eq!(country.code().parse::<Country>().unwrap(), country);
            assert_eq!(country.code().len(), 2);
        }
    }
}
