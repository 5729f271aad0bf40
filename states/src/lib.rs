//! Small reactive state runtime used by the roster UI.
//!
//! Plain values ([`State`]) and derived values ([`Compute`]) live side by side in a
//! [`StateCtx`], keyed by their type. Computes declare what they read; the context keeps a
//! dependency [`Graph`] so that changing a state only re-runs the computes downstream of it.
//! Side effects (network IO) are [`Command`]s that are dispatched explicitly and publish their
//! results through a generation-checked [`LatestOnlyUpdater`].

mod command;
mod compute;
mod ctx;
mod dep;
mod graph;
mod state;
mod task;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::State;
pub use task::{TaskHandle, TaskId};
pub use updater::{LatestOnlyUpdater, Updater};
