use std::{any::Any, future::Future, pin::Pin};

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A user action.
///
/// `run` is called on the UI thread while the command queue is flushed. Work
/// done before the returned future is built happens synchronously; the future
/// itself is spawned on the task set and may outlive the frame that started it.
pub trait Command: Any + Send + Sync {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}
