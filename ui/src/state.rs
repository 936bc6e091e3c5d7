use std::sync::Arc;

use log::warn;
use portal_business::{
    Authenticator, BusinessConfig, FieldError, HttpAuthenticator, MemoryHistory, Navigator, Route,
    install_login_form, reset_login_form,
};
use portal_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Navigation stack shared with the login commands.
    pub history: MemoryHistory,
    /// Blocking error of the last submit, shown next to the offending field.
    pub field_error: Option<FieldError>,
    /// Route rendered by the previous frame.
    shown: Option<Route>,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|e| {
            warn!("State: ignoring PORTAL_* environment: {e}");
            BusinessConfig::default()
        });
        let authenticator = Arc::new(HttpAuthenticator::new(&config));
        let start = config.default_route.clone();
        Self::new(config, authenticator, &start)
    }
}

impl State {
    /// Builds the state and opens `start`, redirecting to the login page when
    /// `start` is a protected route.
    pub fn new(config: BusinessConfig, authenticator: Arc<dyn Authenticator>, start: &str) -> Self {
        let history = MemoryHistory::new(start);
        if Route::from_path(start).is_some_and(Route::is_protected) {
            history.redirect_to_login(&config.login_route);
        }

        let mut ctx = StateCtx::new();
        install_login_form(&mut ctx, config, authenticator, Arc::new(history.clone()));

        let shown = Route::from_path(&history.current_location().path);

        Self {
            ctx,
            history,
            field_error: None,
            shown,
        }
    }

    /// State talking to the backend at `base_url`, opened on the login page.
    pub fn test(base_url: String) -> Self {
        let config = BusinessConfig::new(base_url);
        let authenticator = Arc::new(HttpAuthenticator::new(&config));
        let login = config.login_route.clone();
        Self::new(config, authenticator, &login)
    }

    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.history.current_location().path)
    }

    /// Notices route changes made off-frame, such as the navigation after a
    /// successful sign-in, and resets the form once the login route is left.
    pub fn track_route(&mut self) -> Option<Route> {
        let route = self.route();
        if self.shown == Some(Route::Login) && route != Some(Route::Login) {
            reset_login_form(&mut self.ctx);
            self.field_error = None;
        }
        self.shown = route;
        route
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portal_business::{LoginInput, NavigateOptions, Navigator as _, Route};

    use super::State;
    use crate::test_utils::StaticAuthenticator;

    fn login_state() -> State {
        let config = portal_business::BusinessConfig::new(String::new());
        State::new(config, Arc::new(StaticAuthenticator(Ok(()))), "/login")
    }

    #[test]
    fn leaving_login_resets_form() {
        let mut state = login_state();
        *state.ctx.state_mut::<LoginInput>() = LoginInput::new("user@example.com", "correct");
        assert_eq!(state.track_route(), Some(Route::Login));

        state.history.navigate_to("/", NavigateOptions::REPLACE);

        assert_eq!(state.track_route(), Some(Route::Home));
        assert_eq!(*state.ctx.state::<LoginInput>(), LoginInput::default());
    }

    #[test]
    fn staying_on_login_keeps_input() {
        let mut state = login_state();
        *state.ctx.state_mut::<LoginInput>() = LoginInput::new("user@example.com", "correct");

        state.track_route();
        state.track_route();

        assert_eq!(state.ctx.state::<LoginInput>().identifier, "user@example.com");
    }

    #[test]
    fn protected_start_opens_login_with_destination() {
        let config = portal_business::BusinessConfig::new(String::new());
        let state = State::new(config, Arc::new(StaticAuthenticator(Ok(()))), "/");

        let location = state.history.current_location();
        assert_eq!(location.path, "/login");
        assert_eq!(location.from.as_deref(), Some("/"));
    }
}
