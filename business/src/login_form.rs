//! Form controller operations, called by the UI on user input.

use std::sync::Arc;

use log::info;
use portal_states::StateCtx;

use crate::{
    Authenticator, AuthenticatorState, BusinessConfig, FieldError, FormStatus, LoginCommand,
    LoginField, LoginInput, NavigateOptions, Navigator, NavigatorState, Route, SocialLoginCommand,
    SocialProvider, SubmitGate,
};

/// Registers every state, compute and command of the login form.
pub fn install_login_form(
    ctx: &mut StateCtx,
    config: BusinessConfig,
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
) {
    ctx.add_state(config);
    ctx.add_state(LoginInput::default());
    ctx.add_state(SubmitGate::default());
    ctx.add_state(AuthenticatorState::new(authenticator));
    ctx.add_state(NavigatorState::new(navigator));
    ctx.record_compute(FormStatus::default());
    ctx.record_command(LoginCommand);
}

/// Overwrites one field and clears the error banner.
pub fn update_field(ctx: &mut StateCtx, field: LoginField, value: impl Into<String>) {
    ctx.state_mut::<LoginInput>().set(field, value);
    ctx.updater().update::<FormStatus>(FormStatus::clear_error);
    ctx.sync_computes();
}

/// Runs the required-field checks, then dispatches [`LoginCommand`].
///
/// A failed check blocks the dispatch and leaves `FormStatus` untouched.
pub fn submit_form(ctx: &mut StateCtx) -> Result<(), FieldError> {
    ctx.state::<LoginInput>().validate()?;
    ctx.dispatch::<LoginCommand>();
    Ok(())
}

pub fn social_sign_in(ctx: &mut StateCtx, provider: SocialProvider) {
    ctx.enqueue(SocialLoginCommand { provider });
    ctx.flush_commands();
}

/// Pushes `route`, leaving the form behind.
///
/// The form is reset first, so coming back to it shows empty fields and no
/// banner.
pub fn follow_link(ctx: &mut StateCtx, route: Route) {
    info!("follow_link: {}", route.path());
    reset_login_form(ctx);
    ctx.state::<NavigatorState>()
        .inner
        .navigate_to(route.path(), NavigateOptions::PUSH);
}

/// Drops the typed credentials and the error banner.
///
/// Called whenever the login route is left. The busy flag is untouched: an
/// attempt still in flight reports back as usual.
pub fn reset_login_form(ctx: &mut StateCtx) {
    *ctx.state_mut::<LoginInput>() = LoginInput::default();
    ctx.updater().update::<FormStatus>(FormStatus::clear_error);
    ctx.sync_computes();
}
