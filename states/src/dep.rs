use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::ctx::Slot;
use crate::{Compute, State};

/// Read-only view of the context handed to computes and commands.
#[derive(Debug, Clone, Copy)]
pub struct Dep<'a> {
    slots: &'a BTreeMap<TypeId, Slot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(slots: &'a BTreeMap<TypeId, Slot>) -> Self {
        Self { slots }
    }

    pub fn state<T: State>(&self) -> Option<&'a T> {
        self.get::<T>()
    }

    pub fn compute<T: Compute>(&self) -> Option<&'a T> {
        self.get::<T>()
    }

    fn get<T: Any>(&self) -> Option<&'a T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }
}
