//! Single in-flight token used by [`crate::SubmitPolicy::Exclusive`].

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use portal_states::{State, state_assign_impl};

/// Shared gate. Snapshots share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    held: Arc<AtomicBool>,
}

/// Proof that the holder is the only attempt in flight. Released on drop.
#[derive(Debug)]
pub struct InFlightToken {
    held: Arc<AtomicBool>,
}

impl SubmitGate {
    pub fn try_acquire(&self) -> Option<InFlightToken> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightToken {
                held: Arc::clone(&self.held),
            })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}

impl State for SubmitGate {
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
