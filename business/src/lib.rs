//! Login form controller: inputs, status, commands and the seams to the
//! authenticator and navigator.

mod auth;
mod config;
mod form_status;
mod history;
mod http_auth;
mod login_form;
mod login_input;
mod login_state;
mod navigator;
mod route;
mod submit_gate;

#[cfg(test)]
mod test_utils;

pub use auth::{AuthError, Authenticator, AuthenticatorState};
pub use config::{BusinessConfig, SubmitPolicy};
pub use form_status::{FormStatus, INVALID_CREDENTIALS_MESSAGE, SOCIAL_LOGIN_FAILED_MESSAGE};
pub use history::{MemoryHistory, Navigation};
pub use http_auth::{HttpAuthenticator, SignInRequest};
pub use login_form::{
    follow_link, install_login_form, reset_login_form, social_sign_in, submit_form, update_field,
};
pub use login_input::{FieldError, LoginField, LoginInput};
pub use login_state::{LoginCommand, SOCIAL_PLACEHOLDER_SECRET, SocialLoginCommand, SocialProvider};
pub use navigator::{Location, NavigateOptions, Navigator, NavigatorState};
pub use route::Route;
pub use submit_gate::{InFlightToken, SubmitGate};
