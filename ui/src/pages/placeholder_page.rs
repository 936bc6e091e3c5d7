//! Stand-in for routes the portal links to but does not implement.

use egui::{Align, Layout, Response, Ui};
use portal_business::{Route, follow_link};

use crate::state::State;

/// Renders `title` with a way back to the previous page.
pub fn placeholder_page(state: &mut State, ui: &mut Ui, title: &str) -> Response {
    let mut back = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading(title);
            ui.add_space(16.0);
            ui.label("This page is not available yet.");
            ui.add_space(16.0);
            back = ui.link("Back to sign in").clicked();
        })
        .response;

    if back && !state.history.back() {
        follow_link(&mut state.ctx, Route::Login);
    }

    response
}
