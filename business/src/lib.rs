//! Domain logic behind the employees table: the users model, display mappings, the
//! filter / sort / paginate pipeline, configuration and the users fetch.

mod actions;
mod config;
mod error;
mod fetch_service;
mod fetch_users;
mod filter;
mod mappings;
pub mod paginate;
mod sort;
mod user;
mod view;

pub use actions::{TableAction, apply_action, register};
pub use config::{BusinessConfig, ConfigError, DEFAULT_USERS_URL, IconSet, TableConfig};
pub use error::FetchError;
pub use fetch_service::{EhttpFetcher, FetchService, FetchState, OnDone};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::{MockFetcher, json_response};
pub use fetch_users::{
    FetchStatus, FetchStatusCompute, FetchUsersCommand, UsersCompute, decode_users,
};
pub use filter::{COUNTRY_OPTIONS, FilterState, GENDER_OPTIONS, filter_users};
pub use mappings::{DisplayMappings, MappingProfile};
pub use paginate::{PageState, paginate, total_pages};
pub use sort::{SortDirection, SortField, SortState, sort_users};
pub use user::{Address, Company, User, UsersResponse};
pub use view::{UsersPageCompute, VisibleUsersCompute};
