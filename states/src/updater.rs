use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::{Compute, StateError};

type Modify = Box<dyn FnOnce(&mut dyn Any) + Send>;

pub(crate) enum Update {
    Set(TypeId, Box<dyn Any + Send>),
    Modify(TypeId, Modify),
}

/// Write half of the compute channel.
///
/// Cheap to clone and `Send`, so commands carry it into their futures. Updates
/// are queued in order and only land once the owner of the [`crate::StateCtx`]
/// calls `sync_computes()`.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Replaces the whole compute.
    pub fn set<T: Compute>(&self, value: T) {
        self.send_update::<T>(Update::Set(TypeId::of::<T>(), Box::new(value)));
    }

    /// Edits the compute in place, on top of every update queued before it.
    pub fn update<T: Compute>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let modify: Modify = Box::new(move |any| match any.downcast_mut::<T>() {
            Some(value) => f(value),
            None => warn!("Updater::update: type mismatch for {}", type_name::<T>()),
        });
        self.send_update::<T>(Update::Modify(TypeId::of::<T>(), modify));
    }

    fn send_update<T: Compute>(&self, update: Update) {
        if self.send.send(update).is_err() {
            warn!(
                "{}",
                StateError::Disconnected {
                    type_name: type_name::<T>()
                }
            );
        }
    }
}

impl std::fmt::Debug for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set(id, _) => f.debug_tuple("Set").field(id).finish(),
            Self::Modify(id, _) => f.debug_tuple("Modify").field(id).finish(),
        }
    }
}
