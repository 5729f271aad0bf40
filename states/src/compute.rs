use std::any::{Any, TypeId};
use std::fmt::Debug;

use crate::{Dep, State, Updater};

/// Types a compute reads from the context.
///
/// Built with the chained helpers:
///
/// ```ignore
/// ComputeDeps::new().state::<FilterState>().compute::<UsersCompute>()
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeDeps {
    states: Vec<TypeId>,
    computes: Vec<TypeId>,
}

impl ComputeDeps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state<T: State>(mut self) -> Self {
        self.states.push(TypeId::of::<T>());
        self
    }

    pub fn compute<T: Compute>(mut self) -> Self {
        self.computes.push(TypeId::of::<T>());
        self
    }

    pub fn states(&self) -> &[TypeId] {
        &self.states
    }

    pub fn computes(&self) -> &[TypeId] {
        &self.computes
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.states.iter().chain(self.computes.iter()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.computes.is_empty()
    }
}

/// A derived value, recomputed whenever one of its dependencies changes.
///
/// `compute` must not perform side effects: it may run at startup or after any upstream write.
/// It publishes its new value by calling `updater.set(Self { .. })`; the context swaps it in
/// and marks downstream computes dirty.
///
/// A compute with no dependencies and an empty body is a "compute-shaped cache": its value is
/// only ever replaced by a [`Command`](crate::Command).
pub trait Compute: Any + Debug {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Input;

    impl State for Input {}

    #[derive(Debug, Default)]
    struct Doubled;

    impl Compute for Doubled {
        fn deps(&self) -> ComputeDeps {
            ComputeDeps::new().state::<Input>()
        }

        fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
    }

    #[test]
    fn deps_keep_states_and_computes_apart() {
        let deps = ComputeDeps::new().state::<Input>().compute::<Doubled>();

        assert_eq!(deps.states(), &[TypeId::of::<Input>()]);
        assert_eq!(deps.computes(), &[TypeId::of::<Doubled>()]);
        assert_eq!(deps.iter().count(), 2);
        assert!(!deps.is_empty());
        assert!(ComputeDeps::new().is_empty());
    }
}
