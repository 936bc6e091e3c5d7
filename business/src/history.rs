//! In-process navigator backed by a history stack.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;

use crate::{Location, NavigateOptions, Navigator};

/// A navigation request as received by [`MemoryHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub options: NavigateOptions,
}

#[derive(Debug, Default)]
struct HistoryInner {
    entries: Vec<Location>,
    navigations: Vec<Navigation>,
}

/// Shared history stack. Clones point at the same stack.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    inner: Arc<Mutex<HistoryInner>>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        let history = Self::default();
        history.lock().entries.push(Location::new(initial));
        history
    }

    fn lock(&self) -> MutexGuard<'_, HistoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, location: Location) {
        self.lock().entries.push(location);
    }

    pub fn replace(&self, location: Location) {
        let mut inner = self.lock();
        inner.entries.pop();
        inner.entries.push(location);
    }

    /// Pops the current entry. The first entry is never popped.
    pub fn back(&self) -> bool {
        let mut inner = self.lock();
        if inner.entries.len() > 1 {
            inner.entries.pop();
            true
        } else {
            false
        }
    }

    /// Route guard: replaces the current entry with the login page and
    /// records the current path as the intended destination.
    pub fn redirect_to_login(&self, login_route: &str) {
        let from = self.current_location().path;
        info!("MemoryHistory: '{from}' requires sign-in, redirecting");
        self.replace(Location::redirected_from(login_route, from));
    }

    /// Paths of every entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock()
            .entries
            .iter()
            .map(|location| location.path.clone())
            .collect()
    }

    /// Every `navigate_to` call received so far.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.lock().navigations.clone()
    }
}

impl Navigator for MemoryHistory {
    fn navigate_to(&self, path: &str, options: NavigateOptions) {
        self.lock().navigations.push(Navigation {
            path: path.to_owned(),
            options,
        });
        if options.replace {
            self.replace(Location::new(path));
        } else {
            self.push(Location::new(path));
        }
    }

    fn current_location(&self) -> Location {
        self.lock().entries.last().cloned().unwrap_or_default()
    }
}
