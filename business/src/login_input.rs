//! Editable fields of the login form.

use std::any::Any;

use portal_states::{State, state_assign_impl};
use thiserror::Error;

/// Names a text field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// The email address.
    Identifier,
    /// The password.
    Secret,
}

/// Failure of the browser-style required/email checks run before submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please fill out this field.")]
    Required(LoginField),
    #[error("Please enter an email address.")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(self) -> LoginField {
        match self {
            Self::Required(field) => field,
            Self::InvalidEmail => LoginField::Identifier,
        }
    }
}

/// Credentials typed into the form. Lives only in memory.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub identifier: String,
    pub secret: String,
    /// Rendered by the form, not acted on.
    pub remember_me: bool,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl LoginInput {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            remember_me: false,
        }
    }

    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Identifier => &self.identifier,
            LoginField::Secret => &self.secret,
        }
    }

    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Identifier => self.identifier = value,
            LoginField::Secret => self.secret = value,
        }
    }

    /// Required-field and email-shape checks, identifier first.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.identifier.is_empty() {
            return Err(FieldError::Required(LoginField::Identifier));
        }
        if !looks_like_email(&self.identifier) {
            return Err(FieldError::InvalidEmail);
        }
        if self.secret.is_empty() {
            return Err(FieldError::Required(LoginField::Secret));
        }
        Ok(())
    }
}

/// `local@domain`, both parts non-empty, no whitespace, a single `@`.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}

impl State for LoginInput {
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
