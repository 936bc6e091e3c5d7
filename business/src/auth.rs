//! The authenticator seam.
//!
//! The login form never talks to a backend directly. It is handed an
//! [`Authenticator`] at startup and only ever calls `sign_in` on it.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use portal_states::{State, state_assign_impl};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("server error (status {status})")]
    Server { status: u16 },
    #[error("{0}")]
    Other(String),
}

/// Validates credentials and establishes a session.
#[async_trait]
pub trait Authenticator: Send + Sync + Debug {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<(), AuthError>;
}

/// Holds the injected authenticator so commands can reach it.
#[derive(Debug, Clone)]
pub struct AuthenticatorState {
    pub inner: Arc<dyn Authenticator>,
}

impl AuthenticatorState {
    pub fn new(inner: Arc<dyn Authenticator>) -> Self {
        Self { inner }
    }
}

impl State for AuthenticatorState {
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
