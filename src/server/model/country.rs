//! Country dial codes for the phone input.

use serde::Deserialize;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::model::country::CountryDto;

/// Country preselected in the phone input.
pub const DEFAULT_COUNTRY_CODE: &str = "ET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    pub dial_code: String,
    /// Flag image URL, or an emoji for fallback entries.
    pub flag: String,
}

impl Country {
    fn new(name: &str, code: &str, dial_code: &str, flag: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            dial_code: dial_code.to_string(),
            flag: flag.to_string(),
        }
    }

    /// Countries served when the upstream API is unreachable.
    pub fn fallback() -> Vec<Self> {
        vec![
            Self::new("Ethiopia", "ET", "+251", "🇪🇹"),
            Self::new("United States", "US", "+1", "🇺🇸"),
            Self::new("United Kingdom", "GB", "+44", "🇬🇧"),
            Self::new("Kenya", "KE", "+254", "🇰🇪"),
        ]
    }

    /// Case-insensitive name match or dial code substring match.
    pub fn matches(&self, search: &str) -> bool {
        self.name.to_lowercase().contains(&search.to_lowercase()) || self.dial_code.contains(search)
    }

    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            name: self.name,
            code: self.code,
            dial_code: self.dial_code,
            flag: self.flag,
        }
    }
}

/// Sorts countries alphabetically, ignoring case and accents.
///
/// "Åland Islands" sorts next to "Albania" and "Côte d'Ivoire" before "Cuba". Names equal
/// under that folding fall back to plain string order.
pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by_cached_key(|country| (collation_key(&country.name), country.name.clone()));
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Entry of the REST Countries `v3.1/all?fields=name,cca2,idd,flags` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountry {
    pub name: RestCountryName,
    pub cca2: String,
    #[serde(default)]
    pub idd: Option<RestCountryIdd>,
    #[serde(default)]
    pub flags: RestCountryFlags,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryName {
    pub common: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryIdd {
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestCountryFlags {
    pub svg: Option<String>,
    pub png: Option<String>,
}

impl RestCountry {
    /// Converts an upstream entry, skipping countries without a dial root.
    pub fn into_country(self) -> Option<Country> {
        let idd = self.idd?;
        let root = idd.root.filter(|root| !root.is_empty())?;
        let suffix = idd.suffixes.into_iter().next().unwrap_or_default();

        Some(Country {
            name: self.name.common,
            code: self.cca2,
            dial_code: format!("{}{}", root, suffix),
            flag: self.flags.svg.or(self.flags.png).unwrap_or_default(),
        })
    }
}
