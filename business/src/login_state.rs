//! Login commands.
//!
//! Both commands share one lifecycle:
//!
//! 1. `FormStatus` enters the submitting state (busy, no error)
//! 2. `Authenticator::sign_in` is awaited
//! 3. On success the navigator is asked to move on
//! 4. On failure a fixed message is shown; the cause is only logged
//! 5. `busy` is cleared either way
//!
//! Under [`SubmitPolicy::Advisory`] nothing here stops a second attempt from
//! starting while the first is outstanding. Under [`SubmitPolicy::Exclusive`]
//! the attempt holds the [`SubmitGate`] token and later attempts are dropped
//! before touching `FormStatus`.

use std::fmt;
use std::sync::Arc;

use log::{error, info, warn};
use portal_states::{Command, CommandFuture, CommandSnapshot, StateError, Updater};

use crate::{
    Authenticator, AuthenticatorState, BusinessConfig, FormStatus, INVALID_CREDENTIALS_MESSAGE,
    InFlightToken, LoginInput, NavigateOptions, Navigator, NavigatorState,
    SOCIAL_LOGIN_FAILED_MESSAGE, SubmitGate, SubmitPolicy,
};

/// Password used for every placeholder social sign-in.
pub const SOCIAL_PLACEHOLDER_SECRET: &str = "dummy-password";

/// Social providers offered on the login page.
///
/// These are stand-ins: no OAuth redirect happens. The authenticator receives
/// a synthesized `<provider>@example.com` identifier instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    LinkedIn,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::LinkedIn];

    pub fn name(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::LinkedIn => "linkedin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Continue with Google",
            Self::LinkedIn => "Continue with LinkedIn",
        }
    }

    pub fn placeholder_identifier(self) -> String {
        format!("{}@example.com", self.name())
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

enum Admission {
    Open,
    Held(InFlightToken),
    Rejected,
}

impl Admission {
    fn decide(config: &BusinessConfig, gate: &SubmitGate) -> Self {
        match config.submit_policy {
            SubmitPolicy::Advisory => Self::Open,
            SubmitPolicy::Exclusive => gate.try_acquire().map_or(Self::Rejected, Self::Held),
        }
    }
}

struct Attempt {
    command: &'static str,
    identifier: String,
    secret: String,
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
    destination: String,
    options: NavigateOptions,
    failure_message: &'static str,
}

impl Attempt {
    fn start(self, admission: Admission, updater: Updater) -> CommandFuture {
        if matches!(admission, Admission::Rejected) {
            info!("{}: an attempt is already in flight, dropped", self.command);
            return Box::pin(async {});
        }

        updater.update::<FormStatus>(FormStatus::begin);

        Box::pin(async move {
            let _admission = admission;
            let Self {
                command,
                identifier,
                secret,
                authenticator,
                navigator,
                destination,
                options,
                failure_message,
            } = self;

            match authenticator.sign_in(&identifier, &secret).await {
                Ok(()) => {
                    info!("{command}: signed in, navigating to '{destination}'");
                    navigator.navigate_to(&destination, options);
                    updater.update::<FormStatus>(FormStatus::succeed);
                }
                Err(err) => {
                    warn!("{command}: sign-in failed: {err}");
                    updater.update::<FormStatus>(move |status| status.fail(failure_message));
                }
            }
        })
    }
}

struct Deps {
    config: BusinessConfig,
    gate: SubmitGate,
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
}

impl Deps {
    fn from_snapshot(snap: &CommandSnapshot) -> Result<Self, StateError> {
        Ok(Self {
            config: snap.state::<BusinessConfig>()?.clone(),
            gate: snap.state::<SubmitGate>()?.clone(),
            authenticator: Arc::clone(&snap.state::<AuthenticatorState>()?.inner),
            navigator: Arc::clone(&snap.state::<NavigatorState>()?.inner),
        })
    }
}

/// Manual-only command that signs in with the typed credentials.
///
/// On success navigates to the destination recorded by the route guard, or
/// the configured default route, replacing the login entry. On failure shows
/// [`INVALID_CREDENTIALS_MESSAGE`].
///
/// The command does not validate its input; see [`crate::submit_form`].
///
/// Dispatch explicitly via `ctx.dispatch::<LoginCommand>()`.
#[derive(Default, Debug)]
pub struct LoginCommand;

impl Command for LoginCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let (deps, input) = match Deps::from_snapshot(&snap)
            .and_then(|deps| Ok((deps, snap.state::<LoginInput>()?.clone())))
        {
            Ok(found) => found,
            Err(e) => {
                error!("LoginCommand: {e}");
                return Box::pin(async {});
            }
        };

        let admission = Admission::decide(&deps.config, &deps.gate);
        let destination = deps
            .navigator
            .current_location()
            .from
            .unwrap_or(deps.config.default_route);

        Attempt {
            command: "LoginCommand",
            identifier: input.identifier,
            secret: input.secret,
            authenticator: deps.authenticator,
            navigator: deps.navigator,
            destination,
            options: NavigateOptions::REPLACE,
            failure_message: INVALID_CREDENTIALS_MESSAGE,
        }
        .start(admission, updater)
    }
}

/// One-off command that signs in through a placeholder social provider.
///
/// On success pushes the default route. On failure shows
/// [`SOCIAL_LOGIN_FAILED_MESSAGE`].
///
/// Enqueue via `ctx.enqueue(SocialLoginCommand { provider })`.
#[derive(Debug)]
pub struct SocialLoginCommand {
    pub provider: SocialProvider,
}

impl Command for SocialLoginCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let deps = match Deps::from_snapshot(&snap) {
            Ok(deps) => deps,
            Err(e) => {
                error!("SocialLoginCommand: {e}");
                return Box::pin(async {});
            }
        };

        let admission = Admission::decide(&deps.config, &deps.gate);
        info!("SocialLoginCommand: placeholder sign-in via {}", self.provider);

        Attempt {
            command: "SocialLoginCommand",
            identifier: self.provider.placeholder_identifier(),
            secret: SOCIAL_PLACEHOLDER_SECRET.to_owned(),
            authenticator: deps.authenticator,
            navigator: deps.navigator,
            destination: deps.config.default_route,
            options: NavigateOptions::PUSH,
            failure_message: SOCIAL_LOGIN_FAILED_MESSAGE,
        }
        .start(admission, updater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_placeholders() {
        assert_eq!(
            SocialProvider::Google.placeholder_identifier(),
            "google@example.com"
        );
        assert_eq!(
            SocialProvider::LinkedIn.placeholder_identifier(),
            "linkedin@example.com"
        );
    }

    #[test]
    fn provider_labels() {
        assert_eq!(SocialProvider::Google.label(), "Continue with Google");
        assert_eq!(SocialProvider::LinkedIn.label(), "Continue with LinkedIn");
        assert_eq!(SocialProvider::LinkedIn.to_string(), "linkedin");
    }

    #[test]
    fn advisory_always_admits() {
        let config = BusinessConfig::default();
        let gate = SubmitGate::default();
        let _held = gate.try_acquire();
        assert!(matches!(Admission::decide(&config, &gate), Admission::Open));
    }

    #[test]
    fn exclusive_admits_once() {
        let config = BusinessConfig::default().with_submit_policy(SubmitPolicy::Exclusive);
        let gate = SubmitGate::default();

        let first = Admission::decide(&config, &gate);
        assert!(matches!(first, Admission::Held(_)));
        assert!(matches!(
            Admission::decide(&config, &gate),
            Admission::Rejected
        ));

        drop(first);
        assert!(matches!(
            Admission::decide(&config, &gate),
            Admission::Held(_)
        ));
    }
}
