use egui::{Align, Layout, Response, Ui};
use portal_business::{Navigator, Route, follow_link};

use crate::state::State;

/// Shown for any path that matches no route.
pub fn not_found_page(state: &mut State, ui: &mut Ui) -> Response {
    let path = state.history.current_location().path;
    let mut home = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Page not found");
            ui.label(format!("Nothing lives at {path}"));
            ui.add_space(16.0);
            home = ui.link("Go to sign in").clicked();
        })
        .response;

    if home {
        follow_link(&mut state.ctx, Route::Login);
    }

    response
}
