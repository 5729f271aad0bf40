use std::any::Any;
use std::fmt::Debug;

/// A plain value stored in [`StateCtx`](crate::StateCtx), looked up by its type.
///
/// States are written by the UI (through `StateCtx::update`) or by commands (through an
/// updater). Every write marks the computes that depend on the state as dirty.
pub trait State: Any + Debug {}
