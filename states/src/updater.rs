use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use flume::Sender;
use log::{debug, warn};

use crate::{TaskHandle, TaskId};

/// Callback fired after an update is queued, used by the UI to request a repaint.
pub(crate) type Waker = Arc<dyn Fn() + Send + Sync>;

/// A queued replacement for one state or compute.
#[derive(Debug)]
pub(crate) struct Envelope {
    pub(crate) target: TypeId,
    pub(crate) name: &'static str,
    pub(crate) task: Option<TaskId>,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Sends new values back to the [`StateCtx`](crate::StateCtx).
///
/// Values are applied on the next `StateCtx::sync_computes`, on the thread that owns the
/// context. The updater itself is `Send` and may be moved into network callbacks.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Envelope>,
    waker: Option<Waker>,
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("queued", &self.send.len())
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Envelope>, waker: Option<Waker>) -> Self {
        Self { send, waker }
    }

    /// Replace the stored value of type `T`.
    pub fn set<T: Any + Send>(&self, value: T) {
        self.send_envelope(None, value);
    }

    fn send_envelope<T: Any + Send>(&self, task: Option<TaskId>, value: T) {
        let envelope = Envelope {
            target: TypeId::of::<T>(),
            name: type_name::<T>(),
            task,
            value: Box::new(value),
        };

        if self.send.send(envelope).is_err() {
            warn!("State context dropped, discarding update for {}", type_name::<T>());
            return;
        }

        if let Some(waker) = &self.waker {
            waker();
        }
    }
}

/// An [`Updater`] bound to one command dispatch.
///
/// Updates are tagged with the dispatch's [`TaskId`]. They are skipped here once the task is
/// cancelled, and dropped by the context if a newer dispatch of the same command exists by
/// the time they are applied.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    task: TaskHandle,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, task: TaskHandle) -> Self {
        Self { inner, task }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self.task.is_cancelled() {
            debug!(
                "Skip update for {} from cancelled task generation {}",
                type_name::<T>(),
                self.task.id().generation()
            );
            return;
        }
        self.inner.send_envelope(Some(self.task.id()), value);
    }

    pub fn task_id(&self) -> TaskId {
        self.task.id()
    }

    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }
}
