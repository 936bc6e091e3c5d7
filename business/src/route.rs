//! Routes the portal knows how to render.

use serde::{Deserialize, Serialize};

/// Represents a page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Login page - shown when user is not authenticated
    #[default]
    Login,
    /// Landing page after sign-in
    Home,
    Register,
    ForgotPassword,
}

impl Route {
    pub const ALL: [Self; 4] = [Self::Login, Self::Home, Self::Register, Self::ForgotPassword];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
        }
    }

    /// Matches a navigator path. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether reaching this route requires a signed-in user.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Home)
    }
}
