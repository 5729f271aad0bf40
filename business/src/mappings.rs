//! Display mappings shared by filtering and rendering.
//!
//! A single table per field: the filter treats a user as matching when either the mapped
//! label or the raw value equals the selected option, and the table shows the mapped label,
//! falling back to the raw value.

use serde::Deserialize;

static COUNTRIES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("India", "IND"),
    ("United Arab Emirates", "UAE"),
    ("United Kingdom", "UK"),
];

static GENDERS: &[(&str, &str)] = &[("male", "M"), ("female", "F"), ("other", "Other")];

/// How much of the mapping tables is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingProfile {
    #[default]
    Full,
    /// Only the United States / India / United Kingdom countries and the male / female genders.
    Core,
}

impl MappingProfile {
    pub fn mappings(self) -> DisplayMappings {
        match self {
            Self::Full => DisplayMappings {
                countries: COUNTRIES,
                genders: GENDERS,
            },
            Self::Core => DisplayMappings {
                countries: &[
                    ("United States", "USA"),
                    ("India", "IND"),
                    ("United Kingdom", "UK"),
                ],
                genders: &GENDERS[..2],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMappings {
    countries: &'static [(&'static str, &'static str)],
    genders: &'static [(&'static str, &'static str)],
}

impl Default for DisplayMappings {
    fn default() -> Self {
        MappingProfile::default().mappings()
    }
}

fn lookup(table: &[(&str, &'static str)], raw: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}

impl DisplayMappings {
    pub fn country_abbreviation(&self, country: &str) -> Option<&'static str> {
        lookup(self.countries, country)
    }

    pub fn gender_label(&self, gender: &str) -> Option<&'static str> {
        lookup(self.genders, gender)
    }

    pub fn display_country<'a>(&self, country: &'a str) -> &'a str {
        self.country_abbreviation(country).unwrap_or(country)
    }

    pub fn display_gender<'a>(&self, gender: &'a str) -> &'a str {
        self.gender_label(gender).unwrap_or(gender)
    }

    /// `true` when `selected` names this country, by abbreviation or by raw value.
    pub fn country_matches(&self, country: &str, selected: &str) -> bool {
        self.country_abbreviation(country) == Some(selected) || country == selected
    }

    pub fn gender_matches(&self, gender: &str, selected: &str) -> bool {
        self.gender_label(gender) == Some(selected) || gender == selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_profile_maps_and_falls_back() {
        let mappings = MappingProfile::Full.mappings();

        assert_eq!(mappings.display_country("United States"), "USA");
        assert_eq!(mappings.display_country("United Arab Emirates"), "UAE");
        assert_eq!(mappings.display_country("Canada"), "Canada");
        assert_eq!(mappings.display_gender("female"), "F");
        assert_eq!(mappings.display_gender("other"), "Other");
        assert_eq!(mappings.display_gender("nonbinary"), "nonbinary");
    }

    #[test]
    fn core_profile_drops_optional_entries() {
        let mappings = MappingProfile::Core.mappings();

        assert_eq!(mappings.country_abbreviation("United Arab Emirates"), None);
        assert_eq!(mappings.country_abbreviation("United Kingdom"), Some("UK"));
        assert_eq!(mappings.gender_label("other"), None);
        assert_eq!(mappings.gender_label("male"), Some("M"));
    }

    #[test]
    fn matches_on_label_or_raw_value() {
        let mappings = DisplayMappings::default();

        assert!(mappings.country_matches("United States", "USA"));
        assert!(mappings.country_matches("USA", "USA"));
        assert!(mappings.country_matches("India", "India"));
        assert!(!mappings.country_matches("Canada", "USA"));
        assert!(mappings.gender_matches("male", "male"));
        assert!(mappings.gender_matches("male", "M"));
        assert!(!mappings.gender_matches("female", "male"));
    }
}
