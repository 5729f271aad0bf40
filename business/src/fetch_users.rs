//! Users fetch: a manual-only command plus the compute-shaped caches it writes.
//!
//! Network IO must not live in a compute, because computes run implicitly whenever their
//! inputs change. `FetchUsersCommand` is dispatched explicitly (on mount, and on page change
//! when configured) and publishes through a `LatestOnlyUpdater`, so the answer to an older
//! dispatch can never replace the answer to a newer one.

use std::sync::Arc;

use ehttp::{Request, Response};
use log::{error, info, warn};
use roster_states::{Command, Compute, ComputeDeps, Dep, LatestOnlyUpdater, Updater};

use crate::{BusinessConfig, FetchError, FetchState, User, UsersResponse};

/// The last successfully fetched list. Only `FetchUsersCommand` replaces it.
#[derive(Debug, Clone, Default)]
pub struct UsersCompute {
    pub users: Arc<Vec<User>>,
}

impl UsersCompute {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

impl Compute for UsersCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by FetchUsersCommand only.
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

#[derive(Debug, Clone, Default)]
pub struct FetchStatusCompute {
    pub status: FetchStatus,
}

impl FetchStatusCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Compute for FetchStatusCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by FetchUsersCommand only.
    }
}

/// Turn a finished request into a users list.
pub fn decode_users(result: ehttp::Result<Response>) -> Result<Vec<User>, FetchError> {
    let response = result.map_err(FetchError::Transport)?;
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_slice::<UsersResponse>(&response.bytes)
        .map(|body| body.users)
        .map_err(|err| FetchError::Decode(err.to_string()))
}

#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: LatestOnlyUpdater) {
        let (Some(config), Some(fetch)) =
            (deps.state::<BusinessConfig>(), deps.state::<FetchState>())
        else {
            warn!("FetchUsersCommand: config or fetch service missing, skipping");
            return;
        };

        let generation = updater.task_id().generation();
        info!(
            "FetchUsersCommand: fetching {} (generation {generation})",
            config.users_url
        );

        updater.set(FetchStatusCompute {
            status: FetchStatus::Loading,
        });

        let request = Request::get(&config.users_url);
        fetch.inner.fetch(
            request,
            Box::new(move |result| match decode_users(result) {
                Ok(users) => {
                    info!(
                        "FetchUsersCommand: fetched {} users (generation {generation})",
                        users.len()
                    );
                    updater.set(UsersCompute::new(users));
                    updater.set(FetchStatusCompute {
                        status: FetchStatus::Loaded,
                    });
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err} (generation {generation})");
                    updater.set(FetchStatusCompute {
                        status: FetchStatus::Failed(err),
                    });
                }
            }),
        );
    }
}
