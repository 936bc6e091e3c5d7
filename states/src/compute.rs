use std::any::{Any, type_name};

use log::warn;

/// Output data written by commands.
///
/// A compute is never edited by the UI directly. Commands publish new values
/// through an [`crate::Updater`], and the UI applies them with
/// [`crate::StateCtx::sync_computes`] before rendering.
pub trait Compute: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

pub fn assign_impl<T: Any>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => warn!("assign_impl: type mismatch for {}", type_name::<T>()),
    }
}
