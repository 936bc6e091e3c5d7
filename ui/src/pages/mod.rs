//! Pages module for the application.
//!
//! One page per route:
//! - `login_page`: the login form
//! - `home_page`: landing page after a successful sign-in
//! - `placeholder_page`: register and forgot-password, not built yet
//! - `not_found_page`: any path without a route

mod home_page;
mod login_page;
mod not_found_page;
mod placeholder_page;

pub use home_page::home_page;
pub use login_page::login_page;
pub use not_found_page::not_found_page;
pub use placeholder_page::placeholder_page;
