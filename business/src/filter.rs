use roster_states::State;
use ustr::Ustr;

use crate::{DisplayMappings, User};

/// Country options offered by the filter dropdown, as `(value, label)`.
pub const COUNTRY_OPTIONS: &[(&str, &str)] = &[
    ("India", "India"),
    ("USA", "USA"),
    ("UK", "UK"),
    ("UAE", "UAE"),
];

/// Gender options offered by the filter dropdown, as `(value, label)`.
pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
];

/// Current filter selection. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    country: Option<Ustr>,
    gender: Option<Ustr>,
}

impl State for FilterState {}

/// Empty selections are the wildcard, same as `None`.
fn normalize(value: Option<Ustr>) -> Option<Ustr> {
    value.filter(|v| !v.is_empty())
}

impl FilterState {
    pub fn new(country: Option<Ustr>, gender: Option<Ustr>) -> Self {
        Self {
            country: normalize(country),
            gender: normalize(gender),
        }
    }

    pub fn country(&self) -> Option<Ustr> {
        self.country
    }

    pub fn gender(&self) -> Option<Ustr> {
        self.gender
    }

    pub fn set_country(&mut self, country: Option<Ustr>) {
        self.country = normalize(country);
    }

    pub fn set_gender(&mut self, gender: Option<Ustr>) {
        self.gender = normalize(gender);
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.gender.is_none()
    }

    pub fn matches(&self, user: &User, mappings: &DisplayMappings) -> bool {
        let country_ok = self
            .country
            .is_none_or(|c| mappings.country_matches(&user.address.country, c.as_str()));
        let gender_ok = self
            .gender
            .is_none_or(|g| mappings.gender_matches(&user.gender, g.as_str()));
        country_ok && gender_ok
    }
}

/// Users matching `filter`, in their original order.
pub fn filter_users<'a>(
    users: &'a [User],
    filter: &FilterState,
    mappings: &DisplayMappings,
) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| filter.matches(user, mappings))
        .collect()
}
