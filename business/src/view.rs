//! Memoized table pipeline.
//!
//! `VisibleUsersCompute` (filter + sort) re-runs only when the fetched list, the filter, the
//! sort or the config change. `UsersPageCompute` slices it and re-runs when the visible list,
//! the page or the config change. Flipping a page therefore never re-sorts.

use std::sync::Arc;

use roster_states::{Compute, ComputeDeps, Dep, Updater};

use crate::paginate::{clamp_page, paginate, total_pages};
use crate::{
    BusinessConfig, FilterState, PageState, SortState, User, UsersCompute, filter_users,
    sort_users,
};

/// Filtered and sorted users.
#[derive(Debug, Clone, Default)]
pub struct VisibleUsersCompute {
    pub users: Arc<Vec<User>>,
}

impl Compute for VisibleUsersCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
            .state::<FilterState>()
            .state::<SortState>()
            .state::<BusinessConfig>()
            .compute::<UsersCompute>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let (Some(all), Some(filter), Some(sort), Some(config)) = (
            deps.compute::<UsersCompute>(),
            deps.state::<FilterState>(),
            deps.state::<SortState>(),
            deps.state::<BusinessConfig>(),
        ) else {
            return;
        };

        let mappings = config.mappings();
        let mut visible = filter_users(&all.users, filter, &mappings);
        sort_users(&mut visible, sort);

        updater.set(VisibleUsersCompute {
            users: Arc::new(visible.into_iter().cloned().collect()),
        });
    }
}

/// Rows of the current page plus what the pagination bar needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPageCompute {
    pub rows: Vec<User>,
    pub page: usize,
    /// `ceil(visible / page_size)`, zero for an empty list.
    pub total_pages: usize,
    pub total_rows: usize,
    pub paginated: bool,
}

impl Default for UsersPageCompute {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            total_pages: 0,
            total_rows: 0,
            paginated: true,
        }
    }
}

impl UsersPageCompute {
    pub fn has_previous(&self) -> bool {
        crate::paginate::has_previous(self.page)
    }

    pub fn has_next(&self) -> bool {
        crate::paginate::has_next(self.page, self.total_pages)
    }

    /// `"Page 1 of 3"`. An empty list reads `"Page 1 of 1"`.
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages.max(1))
    }
}

impl Compute for UsersPageCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
            .state::<PageState>()
            .state::<BusinessConfig>()
            .compute::<VisibleUsersCompute>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let (Some(visible), Some(page), Some(config)) = (
            deps.compute::<VisibleUsersCompute>(),
            deps.state::<PageState>(),
            deps.state::<BusinessConfig>(),
        ) else {
            return;
        };

        let total_rows = visible.users.len();
        let next = if config.table.paginate {
            let total = total_pages(total_rows, config.page_size);
            // A refetch may shrink the list under a page that is now past the end.
            let current = clamp_page(page.page(), total);
            UsersPageCompute {
                rows: paginate(&visible.users, current, config.page_size).to_vec(),
                page: current,
                total_pages: total,
                total_rows,
                paginated: true,
            }
        } else {
            UsersPageCompute {
                rows: visible.users.to_vec(),
                page: 1,
                total_pages: usize::from(total_rows > 0),
                total_rows,
                paginated: false,
            }
        };

        updater.set(next);
    }
}
