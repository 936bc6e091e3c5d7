//! Home page shown after a successful sign-in.

use egui::{Align, Layout, Response, RichText, Ui};
use portal_business::{Route, follow_link};

use crate::state::State;
use crate::utils::colors::COLOR_GREEN;

/// Renders the signed-in banner and a link back to the login form.
pub fn home_page(state: &mut State, ui: &mut Ui) -> Response {
    let mut sign_out = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Portal");
            ui.add_space(40.0);

            ui.label(RichText::new("Signed in").size(24.0).color(COLOR_GREEN));
            ui.add_space(16.0);

            sign_out = ui.link("Sign out").clicked();
        })
        .response;

    if sign_out {
        follow_link(&mut state.ctx, Route::Login);
    }

    response
}
