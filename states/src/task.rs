//! Identity and cancellation for dispatched commands.
//!
//! Every `StateCtx::dispatch` allocates a [`TaskId`] (command type + generation) and wraps it
//! with a `CancellationToken` in a [`TaskHandle`]. Dispatching the same command again cancels
//! the previous handle, and the context only applies updates from the newest generation.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies one dispatch of a command.
///
/// The generation counter is shared by the whole context and only grows, so for the same
/// command type a higher generation always means a later dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The `TypeId` of the command that was dispatched.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A dispatched task together with its cancellation token.
///
/// Cancellation is cooperative: callbacks check [`TaskHandle::is_cancelled`] before publishing.
/// Clones share the same token.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
