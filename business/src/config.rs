use std::env::vars;

use log::info;
use roster_states::State;
use serde::Deserialize;
use thiserror::Error;

use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::{DisplayMappings, MappingProfile};

pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("ROSTER_PAGE_SIZE must be at least 1")]
    ZeroPageSize,
}

/// Glyphs used by the table header and filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    #[default]
    Arrows,
    Plain,
}

impl IconSet {
    pub fn ascending(self) -> &'static str {
        match self {
            Self::Arrows => "⬆",
            Self::Plain => "^",
        }
    }

    pub fn descending(self) -> &'static str {
        match self {
            Self::Arrows => "⬇",
            Self::Plain => "v",
        }
    }

    pub fn filter(self) -> &'static str {
        match self {
            Self::Arrows => "🔍",
            Self::Plain => "Filter:",
        }
    }
}

/// Presentation switches for the employees table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub icons: IconSet,
    /// `false` renders every filtered row and hides the pagination controls.
    pub paginate: bool,
    pub refetch_on_page_change: bool,
    pub mappings: MappingProfile,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            icons: IconSet::default(),
            paginate: true,
            refetch_on_page_change: false,
            mappings: MappingProfile::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub users_url: String,
    pub page_size: usize,
    pub table: TableConfig,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            table: TableConfig::default(),
        }
    }
}

impl State for BusinessConfig {}

/// Environment overrides, all optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_users_url: Option<String>,
    roster_page_size: Option<usize>,
    roster_paginate: Option<bool>,
    roster_refetch_on_page_change: Option<bool>,
    roster_icons: Option<IconSet>,
    roster_mappings: Option<MappingProfile>,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    pub fn mappings(&self) -> DisplayMappings {
        self.table.mappings.mappings()
    }

    /// Reads `ROSTER_*` overrides from the process environment.
    pub fn init() -> Result<Self, ConfigError> {
        info!("Loading roster configuration from environment variables");
        Self::from_env_iter(vars())
    }

    pub fn from_env_iter<I, S>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(iter)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            roster_users_url,
            roster_page_size,
            roster_paginate,
            roster_refetch_on_page_change,
            roster_icons,
            roster_mappings,
        } = raw;

        let defaults = TableConfig::default();
        let page_size = roster_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let users_url = match roster_users_url {
            Some(url) if !url.is_empty() => {
                info!("Using provided ROSTER_USERS_URL: {url}");
                url
            }
            _ => DEFAULT_USERS_URL.to_string(),
        };

        Ok(Self {
            users_url,
            page_size,
            table: TableConfig {
                icons: roster_icons.unwrap_or(defaults.icons),
                paginate: roster_paginate.unwrap_or(defaults.paginate),
                refetch_on_page_change: roster_refetch_on_page_change
                    .unwrap_or(defaults.refetch_on_page_change),
                mappings: roster_mappings.unwrap_or(defaults.mappings),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn empty_environment_gives_defaults() {
        let config = BusinessConfig::from_env_iter(Vec::<(&str, &str)>::new())
            .expect("empty environment should load");
        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.users_url, "https://dummyjson.com/users");
        assert_eq!(config.page_size, 10);
        assert!(config.table.paginate);
    }

    #[test]
    fn overrides_are_applied() {
        let config = BusinessConfig::from_env_iter(vec![
            ("ROSTER_USERS_URL", "http://localhost:9000/users"),
            ("ROSTER_PAGE_SIZE", "25"),
            ("ROSTER_PAGINATE", "false"),
            ("ROSTER_REFETCH_ON_PAGE_CHANGE", "true"),
            ("ROSTER_ICONS", "plain"),
            ("ROSTER_MAPPINGS", "core"),
            ("PATH", "/usr/bin"),
        ])
        .expect("overrides should load");

        assert_eq!(config.users_url, "http://localhost:9000/users");
        assert_eq!(config.page_size, 25);
        assert_eq!(
            config.table,
            TableConfig {
                icons: IconSet::Plain,
                paginate: false,
                refetch_on_page_change: true,
                mappings: MappingProfile::Core,
            }
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("ROSTER_PAGE_SIZE", "0")]).expect("RawConfig should deserialize");
        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
        assert!(err.to_string().contains("ROSTER_PAGE_SIZE"));
    }

    #[test]
    fn malformed_values_are_errors() {
        let result = BusinessConfig::from_env_iter(vec![("ROSTER_PAGE_SIZE", "ten")]);
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    fn icon_sets_have_distinct_glyphs() {
        assert_eq!(IconSet::Arrows.ascending(), "⬆");
        assert_eq!(IconSet::Arrows.descending(), "⬇");
        assert_eq!(IconSet::Plain.ascending(), "^");
        assert_eq!(IconSet::Plain.descending(), "v");
    }
}
