//! The navigator seam.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use portal_states::{State, state_assign_impl};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub const PUSH: Self = Self { replace: false };
    pub const REPLACE: Self = Self { replace: true };
}

/// Where the user currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Intended destination recorded by a route guard before redirecting to
    /// the login page.
    pub from: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: None,
        }
    }

    pub fn redirected_from(path: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: Some(from.into()),
        }
    }
}

/// Performs route transitions.
///
/// Called from command tasks, so implementations must be `Send + Sync`.
pub trait Navigator: Send + Sync + Debug {
    fn navigate_to(&self, path: &str, options: NavigateOptions);

    fn current_location(&self) -> Location;
}

/// Holds the injected navigator so commands can reach it.
#[derive(Debug, Clone)]
pub struct NavigatorState {
    pub inner: Arc<dyn Navigator>,
}

impl NavigatorState {
    pub fn new(inner: Arc<dyn Navigator>) -> Self {
        Self { inner }
    }
}

impl State for NavigatorState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
