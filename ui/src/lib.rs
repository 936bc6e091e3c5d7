//! egui front end of the portal: the login form and the pages it links to.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

mod test_utils;

pub use app::PortalApp;
