//! Busy flag and error banner of the login form.

use std::any::Any;

use portal_states::{Compute, assign_impl};

/// Shown when a password sign-in fails, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// Shown when a social sign-in fails, whatever the cause.
pub const SOCIAL_LOGIN_FAILED_MESSAGE: &str = "Social login failed. Please try again.";

/// Compute-shaped cache written by the login commands.
///
/// `busy` is true while an attempt is outstanding. `error` is set only after a
/// failed attempt and cleared by any field edit or new attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub busy: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Enters the submitting state.
    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.busy = false;
    }

    pub fn fail(&mut self, message: &str) {
        self.busy = false;
        self.error = Some(message.to_owned());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Signing in..." } else { "Sign in" }
    }
}

impl Compute for FormStatus {
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
        assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_failure() {
        let mut status = FormStatus::default();
        status.begin();
        assert!(status.busy);
        assert_eq!(status.submit_label(), "Signing in...");

        status.fail(INVALID_CREDENTIALS_MESSAGE);
        assert!(!status.busy);
        assert_eq!(status.error.as_deref(), Some("Invalid email or password"));
        assert_eq!(status.submit_label(), "Sign in");
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut status = FormStatus::default();
        status.fail(SOCIAL_LOGIN_FAILED_MESSAGE);
        status.begin();
        assert_eq!(status.error, None);
    }

    #[test]
    fn succeed_keeps_error_absent() {
        let mut status = FormStatus::default();
        status.begin();
        status.succeed();
        assert_eq!(status, FormStatus::default());
    }
}
