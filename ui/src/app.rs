use std::time::Duration;

use portal_business::Route;

use crate::{pages, state::State};

/// How often to poll while sign-in attempts are in flight.
const TASK_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct PortalApp {
    state: State,
}

impl PortalApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for PortalApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        let route = self.state.track_route();

        egui::CentralPanel::default().show(ctx, |ui| match route {
            Some(Route::Login) => pages::login_page(&mut self.state, ui),
            Some(Route::Home) => pages::home_page(&mut self.state, ui),
            Some(Route::Register) => {
                pages::placeholder_page(&mut self.state, ui, "Create an account")
            }
            Some(Route::ForgotPassword) => {
                pages::placeholder_page(&mut self.state, ui, "Reset your password")
            }
            None => pages::not_found_page(&mut self.state, ui),
        });

        // Commands finish off-frame; keep polling until they report back.
        if self.state.ctx.task_count() > 0 {
            ctx.request_repaint_after(TASK_POLL_INTERVAL);
        }
    }
}
