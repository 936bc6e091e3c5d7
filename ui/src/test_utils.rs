//! Harness helpers for widget tests.

#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use egui_kittest::Harness;
use portal_business::{AuthError, Authenticator, BusinessConfig};

use crate::state::State;

/// Authenticator answering every call with the same outcome.
#[derive(Debug)]
pub struct StaticAuthenticator(pub Result<(), AuthError>);

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn sign_in(&self, _identifier: &str, _secret: &str) -> Result<(), AuthError> {
        self.0.clone()
    }
}

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Opens the login page with an authenticator that always returns `outcome`.
    pub fn new(
        outcome: Result<(), AuthError>,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        let config = BusinessConfig::new(String::new());
        let login = config.login_route.clone();
        let state = State::new(config, Arc::new(StaticAuthenticator(outcome)), &login);

        Self {
            harness: Harness::new_ui_state(app, state),
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }
}
