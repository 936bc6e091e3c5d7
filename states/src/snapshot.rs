use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, State, StateError};

#[derive(Default)]
pub struct StateSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: State>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}

#[derive(Default)]
pub struct ComputeSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl ComputeSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: Compute>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}

/// Owned copy of the states and computes a command may read.
///
/// Taken on the UI thread when the command is flushed, then moved into the
/// command's future.
#[derive(Default)]
pub struct CommandSnapshot {
    states: StateSnapshot,
    computes: ComputeSnapshot,
}

impl CommandSnapshot {
    pub fn new(states: StateSnapshot, computes: ComputeSnapshot) -> Self {
        Self { states, computes }
    }

    pub fn state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get::<T>()
            .ok_or_else(|| StateError::state_not_found(type_name::<T>(), "command snapshot"))
    }

    pub fn compute<T: Compute>(&self) -> Result<&T, StateError> {
        self.computes
            .get::<T>()
            .ok_or_else(|| StateError::compute_not_found(type_name::<T>(), "command snapshot"))
    }
}
