//! Login widget for email/password and social sign-in.
//!
//! Renders the whole form: social buttons, error banner, credential fields,
//! "Remember me", the submit button and the secondary links.

use egui::{Align, Button, Key, Layout, Response, RichText, TextEdit, Ui};
use portal_business::{
    FieldError, FormStatus, LoginField, LoginInput, Route, SocialProvider, follow_link,
    social_sign_in, submit_form, update_field,
};

use crate::state::State;
use crate::utils::colors::{COLOR_INDIGO, COLOR_RED};

/// What the user asked for during this frame.
#[derive(Default)]
struct Intent {
    edits: Vec<LoginField>,
    remember_me: Option<bool>,
    submit: bool,
    social: Option<SocialProvider>,
    link: Option<Route>,
}

/// Displays the login form and applies the user's input to the form state.
pub fn login_widget(state: &mut State, ui: &mut Ui) -> Response {
    let status = state.ctx.compute::<FormStatus>().clone();
    let mut input = state.ctx.state::<LoginInput>().clone();
    let field_error = state.field_error;
    let mut intent = Intent::default();

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Welcome back");
            ui.label("Please sign in to your account");
            ui.add_space(24.0);

            for provider in SocialProvider::ALL {
                if ui.button(provider.label()).clicked() {
                    intent.social = Some(provider);
                }
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Or continue with").weak());
            ui.add_space(8.0);

            if let Some(error) = &status.error {
                ui.colored_label(COLOR_RED, error);
                ui.add_space(8.0);
            }

            ui.label("Email address");
            let email = ui.add(
                TextEdit::singleline(&mut input.identifier).hint_text("Enter your email"),
            );
            if email.changed() {
                intent.edits.push(LoginField::Identifier);
            }
            field_hint(ui, field_error, LoginField::Identifier);

            ui.add_space(8.0);

            ui.label("Password");
            let password = ui.add(
                TextEdit::singleline(&mut input.secret)
                    .password(true)
                    .hint_text("Enter your password"),
            );
            if password.changed() {
                intent.edits.push(LoginField::Secret);
            }
            // Enter submits even while busy; only the button is disabled.
            if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                intent.submit = true;
            }
            field_hint(ui, field_error, LoginField::Secret);

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.checkbox(&mut input.remember_me, "Remember me").changed() {
                    intent.remember_me = Some(input.remember_me);
                }
                if ui
                    .link(RichText::new("Forgot your password?").color(COLOR_INDIGO))
                    .clicked()
                {
                    intent.link = Some(Route::ForgotPassword);
                }
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!status.busy, Button::new(status.submit_label()))
                    .clicked()
                {
                    intent.submit = true;
                }
                if status.busy {
                    ui.spinner();
                }
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label("Don't have an account?");
                if ui.link("Sign up now").clicked() {
                    intent.link = Some(Route::Register);
                }
            });
        })
        .response;

    apply(state, &input, intent);

    response
}

fn field_hint(ui: &mut Ui, error: Option<FieldError>, field: LoginField) {
    if let Some(error) = error.filter(|e| e.field() == field) {
        ui.colored_label(COLOR_RED, error.to_string());
    }
}

fn apply(state: &mut State, input: &LoginInput, intent: Intent) {
    if !intent.edits.is_empty() {
        state.field_error = None;
    }
    for field in intent.edits {
        update_field(&mut state.ctx, field, input.get(field));
    }
    if let Some(remember_me) = intent.remember_me {
        state.ctx.state_mut::<LoginInput>().remember_me = remember_me;
    }
    if let Some(provider) = intent.social {
        social_sign_in(&mut state.ctx, provider);
    }
    if intent.submit {
        state.field_error = submit_form(&mut state.ctx).err();
    }
    if let Some(route) = intent.link {
        follow_link(&mut state.ctx, route);
    }
}
