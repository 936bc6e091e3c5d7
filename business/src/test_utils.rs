//! Test utilities for driving the login commands against fakes.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new();
//! test_ctx.auth.accept("user@example.com", "correct");
//!
//! update_field(&mut test_ctx.ctx, LoginField::Identifier, "user@example.com");
//! update_field(&mut test_ctx.ctx, LoginField::Secret, "correct");
//! test_ctx.ctx.enqueue_command::<LoginCommand>();
//! test_ctx.flush_and_wait().await;
//!
//! assert_eq!(test_ctx.history.current_location().path, "/");
//! ```

#![cfg(test)]

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use portal_states::StateCtx;
use tokio::sync::Semaphore;

use crate::{
    AuthError, Authenticator, BusinessConfig, FormStatus, MemoryHistory, install_login_form,
};

/// Scripted authenticator that records every call.
///
/// Accepts only the credential pairs passed to `accept`; everything else
/// fails with the configured error. When built with `held()`, every call
/// waits until `release` hands out a permit.
#[derive(Debug)]
pub struct FakeAuthenticator {
    calls: Mutex<Vec<(String, String)>>,
    accepted: Mutex<Vec<(String, String)>>,
    failure: Mutex<AuthError>,
    hold: Option<Semaphore>,
}

impl Default for FakeAuthenticator {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            accepted: Mutex::new(Vec::new()),
            failure: Mutex::new(AuthError::InvalidCredentials),
            hold: None,
        }
    }
}

impl FakeAuthenticator {
    pub fn held() -> Self {
        Self {
            hold: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn accept(&self, identifier: &str, secret: &str) {
        self.accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((identifier.to_owned(), secret.to_owned()));
    }

    pub fn fail_with(&self, error: AuthError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = error;
    }

    pub fn release(&self, calls: usize) {
        if let Some(hold) = &self.hold {
            hold.add_permits(calls);
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Authenticator for FakeAuthenticator {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<(), AuthError> {
        let pair = (identifier.to_owned(), secret.to_owned());
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(pair.clone());

        if let Some(hold) = &self.hold {
            hold.acquire()
                .await
                .map_err(|e| AuthError::Other(e.to_string()))?
                .forget();
        }

        let accepted = self
            .accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&pair);
        if accepted {
            Ok(())
        } else {
            Err(self
                .failure
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone())
        }
    }
}

/// A `StateCtx` wired to a [`FakeAuthenticator`] and a [`MemoryHistory`].
pub struct TestContext {
    pub ctx: StateCtx,
    pub auth: Arc<FakeAuthenticator>,
    pub history: MemoryHistory,
}

impl TestContext {
    /// Starts on the login page with no recorded destination.
    pub fn new() -> Self {
        Self::with(
            BusinessConfig::new(String::new()),
            FakeAuthenticator::default(),
            MemoryHistory::new("/login"),
        )
    }

    pub fn with(config: BusinessConfig, auth: FakeAuthenticator, history: MemoryHistory) -> Self {
        let auth = Arc::new(auth);
        let mut ctx = StateCtx::new();
        install_login_form(
            &mut ctx,
            config,
            Arc::clone(&auth) as Arc<dyn Authenticator>,
            Arc::new(history.clone()),
        );

        Self { ctx, auth, history }
    }

    pub fn status(&self) -> &FormStatus {
        self.ctx.compute::<FormStatus>()
    }

    /// Flush all pending commands and wait for their tasks to complete.
    ///
    /// # Panics
    /// Panics when the tasks do not finish within five seconds.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while self.ctx.join_next().await {
                self.ctx.sync_computes();
            }
        })
        .await;
        assert!(
            drained.is_ok(),
            "Timed out waiting for pending tasks ({} still running)",
            self.ctx.task_count()
        );

        self.ctx.sync_computes();
    }

    /// Lets spawned tasks run until they park, without waiting for them.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        self.ctx.sync_computes();
    }
}
