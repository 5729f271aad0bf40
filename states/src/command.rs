use std::any::Any;
use std::fmt::Debug;

use crate::{Dep, LatestOnlyUpdater};

/// A manual-only side effect, run via `StateCtx::dispatch::<C>()`.
///
/// Each dispatch gets a fresh [`TaskHandle`](crate::TaskHandle); dispatching the same command
/// again cancels the previous handle. Results published through the given
/// [`LatestOnlyUpdater`] are dropped once a newer dispatch of the same command exists, so a
/// slow response can never overwrite a newer one.
pub trait Command: Any + Debug {
    fn run(&self, deps: Dep<'_>, updater: LatestOnlyUpdater);
}
