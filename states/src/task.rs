//! Task identifiers for command futures.
//!
//! Every future spawned by [`crate::StateCtx::flush_commands`] is tagged with a
//! `TaskId` combining the command's `TypeId` and a generation counter. The
//! context keeps the ids of unfinished tasks so callers can ask how many
//! instances of a command are still in flight.
//!
//! ```ignore
//! let first = TaskId::new(TypeId::of::<LoginCommand>(), 1);
//! let second = TaskId::new(TypeId::of::<LoginCommand>(), 2);
//!
//! // Same command type, different generation
//! assert_eq!(first.type_id(), second.type_id());
//! assert_ne!(first.generation(), second.generation());
//! ```

use std::any::TypeId;

/// Unique identifier for a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Returns the `TypeId` of the command that spawned the task.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generation values indicate more recently spawned tasks.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
