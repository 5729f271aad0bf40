use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, error, trace, warn};
use tokio_util::sync::CancellationToken;

use crate::updater::{Envelope, Waker};
use crate::{
    Command, Compute, Dep, Graph, LatestOnlyUpdater, State, TaskHandle, TaskId, TopologyError,
    Updater,
};

type RunCompute = fn(&dyn Any, Dep<'_>, Updater);

fn run_compute<T: Compute>(value: &dyn Any, deps: Dep<'_>, updater: Updater) {
    if let Some(compute) = value.downcast_ref::<T>() {
        compute.compute(deps, updater);
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum SlotKind {
    State,
    Compute(RunCompute),
}

#[derive(Debug)]
pub(crate) struct Slot {
    pub(crate) name: &'static str,
    pub(crate) kind: SlotKind,
    pub(crate) value: Box<dyn Any>,
}

/// Owns every state, compute and command of the application.
///
/// Typical frame:
/// 1. `sync_computes()` applies values published by commands since the last frame.
/// 2. UI reads with `state::<T>()` / `cached::<T>()` and writes with `update::<T>(..)`.
/// 3. `run_all_dirty()` re-runs the computes whose inputs changed.
pub struct StateCtx {
    slots: BTreeMap<TypeId, Slot>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    tasks: BTreeMap<TypeId, TaskHandle>,

    graph: Graph<TypeId>,
    // computes only, dependencies first
    order: Vec<TypeId>,
    dirty: BTreeSet<TypeId>,

    generation: u64,
    send: Sender<Envelope>,
    recv: Receiver<Envelope>,
    waker: Option<Waker>,
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("slots", &self.slots.values().map(|s| s.name).collect::<Vec<_>>())
            .field("commands", &self.commands.values().collect::<Vec<_>>())
            .field("dirty", &self.dirty.len())
            .field("generation", &self.generation)
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            slots: BTreeMap::new(),
            commands: BTreeMap::new(),
            tasks: BTreeMap::new(),
            graph: Graph::new(),
            order: Vec::new(),
            dirty: BTreeSet::new(),
            generation: 0,
            send,
            recv,
            waker: None,
        }
    }

    /// Called every time an updater queues a value, from whatever thread it runs on.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), self.waker.clone())
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.slots.insert(
            id,
            Slot {
                name: type_name::<T>(),
                kind: SlotKind::State,
                value: Box::new(state),
            },
        );
        self.graph.add_node(id);
        self.mark_dependents_dirty(id);
    }

    /// Register a compute. It runs on the next `run_all_dirty`.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let deps = compute.deps();

        self.graph.add_node(id);
        for dep in deps.iter() {
            self.graph.route_to(dep, id, ());
        }

        self.slots.insert(
            id,
            Slot {
                name: type_name::<T>(),
                kind: SlotKind::Compute(run_compute::<T>),
                value: Box::new(compute),
            },
        );
        self.dirty.insert(id);

        if let Err(err) = self.refresh_order() {
            error!("Failed to order computes after recording {}: {err}", type_name::<T>());
        }
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Check that the recorded computes form a DAG.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    fn refresh_order(&mut self) -> Result<(), TopologyError<TypeId>> {
        let order = self.graph.topology_sort()?;
        self.order = order
            .into_iter()
            .filter(|id| {
                self.slots
                    .get(id)
                    .is_some_and(|slot| matches!(slot.kind, SlotKind::Compute(_)))
            })
            .collect();
        Ok(())
    }

    pub fn state<T: State>(&self) -> Option<&T> {
        self.get::<T>()
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.get::<T>()
    }

    fn get<T: Any>(&self) -> Option<&T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }

    /// Mutable access to a state. Dependents are marked dirty up front.
    pub fn state_mut<T: State>(&mut self) -> Option<&mut T> {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        self.slots
            .get_mut(&id)
            .and_then(|slot| slot.value.downcast_mut::<T>())
    }

    /// Mutate a state in place and mark its dependents dirty.
    ///
    /// Returns `false` when the state was never added.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self.state_mut::<T>() {
            Some(state) => {
                f(state);
                true
            }
            None => {
                warn!("update::<{}>() on a state that was never added", type_name::<T>());
                false
            }
        }
    }

    pub fn is_dirty<T: Compute>(&self) -> bool {
        self.dirty.contains(&TypeId::of::<T>())
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        self.dirty.extend(self.graph.connected(id).copied());
    }

    /// Run a command with a fresh task, cancelling the previous task of the same command.
    pub fn dispatch<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        if !self.commands.contains_key(&id) {
            warn!("dispatch::<{}>() on a command that was never recorded", type_name::<C>());
            return;
        }

        self.generation += 1;
        let handle = TaskHandle::new(TaskId::new(id, self.generation), CancellationToken::new());
        if let Some(previous) = self.tasks.insert(id, handle.clone()) {
            debug!(
                "Cancel {} generation {} in favour of generation {}",
                type_name::<C>(),
                previous.id().generation(),
                self.generation
            );
            previous.cancel();
        }

        let updater = LatestOnlyUpdater::new(self.updater(), handle);
        if let Some(command) = self.commands.get(&id) {
            command.run(Dep::new(&self.slots), updater);
        }
    }

    /// Whether `task` is still the newest dispatch of its command.
    pub fn is_latest(&self, task: TaskId) -> bool {
        self.tasks
            .get(&task.type_id())
            .is_some_and(|current| current.id() == task)
    }

    /// Apply queued values. Returns `true` if anything changed.
    pub fn sync_computes(&mut self) -> bool {
        let mut applied = false;

        while let Ok(envelope) = self.recv.try_recv() {
            if let Some(task) = envelope.task
                && !self.is_latest(task)
            {
                debug!(
                    "Drop stale update for {} from generation {}",
                    envelope.name,
                    task.generation()
                );
                continue;
            }

            let Some(slot) = self.slots.get_mut(&envelope.target) else {
                warn!("Drop update for unregistered {}", envelope.name);
                continue;
            };

            trace!("Apply update for {}", envelope.name);
            slot.value = envelope.value;
            self.mark_dependents_dirty(envelope.target);
            applied = true;
        }

        applied
    }

    /// Run dirty computes, dependencies first.
    ///
    /// Each compute's output is applied before the next one runs, so a whole chain settles in a
    /// single call.
    pub fn run_all_dirty(&mut self) {
        self.sync_computes();

        for id in self.order.clone() {
            if !self.dirty.remove(&id) {
                continue;
            }

            if let Some(slot) = self.slots.get(&id)
                && let SlotKind::Compute(run) = slot.kind
            {
                trace!("Run compute {}", slot.name);
                run(slot.value.as_ref(), Dep::new(&self.slots), self.updater());
            }

            self.sync_computes();
        }
    }
}
