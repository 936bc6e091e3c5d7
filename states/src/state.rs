use std::any::{Any, type_name};

use log::warn;

/// Input data owned by the UI thread.
///
/// States are edited in place through [`crate::StateCtx::state_mut`] and are
/// copied into a [`crate::CommandSnapshot`] when a command is flushed. A state
/// that returns `None` from [`State::snapshot`] is invisible to commands.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replaces `this` with the boxed value when the types line up.
pub fn state_assign_impl<T: Any>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => warn!("state_assign_impl: type mismatch for {}", type_name::<T>()),
    }
}
