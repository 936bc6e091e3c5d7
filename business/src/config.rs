use std::any::Any;
use std::env::vars;

use log::info;
use portal_states::{State, state_assign_impl};
use serde::Deserialize;
use ustr::Ustr;

use crate::Route;

/// How the form treats a submit while another attempt is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPolicy {
    /// The busy flag only disables the submit control. Every dispatched
    /// attempt reaches the authenticator.
    #[default]
    Advisory,
    /// A single in-flight token is held per attempt; attempts started while
    /// it is held are dropped.
    Exclusive,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Landing route used when no intended destination was recorded.
    pub default_route: String,
    pub login_route: String,
    pub submit_policy: SubmitPolicy,
}

const ENV_PREFIX: &str = "PORTAL";

#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    api_base_url: Option<String>,
    default_route: Option<String>,
    submit_policy: Option<SubmitPolicy>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            ..Self::default()
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn with_submit_policy(mut self, policy: SubmitPolicy) -> Self {
        self.submit_policy = policy;
        self
    }

    /// Defaults overlaid with `PORTAL_*` environment variables.
    pub fn from_env() -> Result<Self, serde_env::Error> {
        Self::from_vars(vars())
    }

    fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, serde_env::Error> {
        let raw: RawEnv = serde_env::from_iter_with_prefix(vars, ENV_PREFIX)?;
        Ok(Self::default().overlay(raw))
    }

    fn overlay(mut self, raw: RawEnv) -> Self {
        if let Some(url) = raw.api_base_url {
            info!("BusinessConfig: api base url overridden to {url}");
            self.api_base_url = url;
        }
        if let Some(route) = raw.default_route {
            self.default_route = route;
        }
        if let Some(policy) = raw.submit_policy {
            self.submit_policy = policy;
        }
        self
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_test") {
                "https://portal-test.lqxclqxc.com".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://portal-internal.lqxclqxc.com".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://portal-nightly.lqxclqxc.com".to_owned()
            } else {
                "https://portal.lqxclqxc.com".to_owned()
            },
            default_route: Route::Home.path().to_owned(),
            login_route: Route::Login.path().to_owned(),
            submit_policy: SubmitPolicy::default(),
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(feature = "env_test") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://portal-test.lqxclqxc.com/api")
            );
        } else if cfg!(feature = "env_internal") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://portal-internal.lqxclqxc.com/api")
            );
        } else if cfg!(feature = "env_nightly") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://portal-nightly.lqxclqxc.com/api")
            );
        } else {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://portal.lqxclqxc.com/api")
            );
        }
    }

    #[test]
    fn empty_base_url_is_relative() {
        let config = BusinessConfig::new(String::new());
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }

    #[test]
    fn defaults_route_to_home_and_advisory() {
        let config = BusinessConfig::default();
        assert_eq!(config.default_route, "/");
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.submit_policy, SubmitPolicy::Advisory);
    }

    #[test]
    fn env_overrides_apply() {
        let raw: RawEnv = from_iter(vec![
            ("API_BASE_URL", "http://localhost:9000"),
            ("DEFAULT_ROUTE", "/dashboard"),
            ("SUBMIT_POLICY", "exclusive"),
        ])
        .expect("RawEnv should deserialize");

        let config = BusinessConfig::default().overlay(raw);
        assert_eq!(config.api_url(), Ustr::from("http://localhost:9000/api"));
        assert_eq!(config.default_route, "/dashboard");
        assert_eq!(config.submit_policy, SubmitPolicy::Exclusive);
    }

    #[test]
    fn only_prefixed_vars_are_read() {
        let vars = [
            ("PORTAL_DEFAULT_ROUTE", "/dashboard"),
            ("PORTAL_SUBMIT_POLICY", "exclusive"),
            ("SUBMIT_POLICY", "advisory"),
            ("API_BASE_URL", "http://elsewhere"),
        ]
        .map(|(key, value)| (key.to_owned(), value.to_owned()));

        let config = BusinessConfig::from_vars(vars).expect("prefixed vars should deserialize");
        assert_eq!(config.default_route, "/dashboard");
        assert_eq!(config.submit_policy, SubmitPolicy::Exclusive);
        assert_eq!(config.api_base_url, BusinessConfig::default().api_base_url);
    }

    #[test]
    fn missing_env_keeps_defaults() {
        let raw: RawEnv = from_iter(Vec::<(&str, &str)>::new()).expect("empty env");
        let config = BusinessConfig::default().overlay(raw);
        assert_eq!(config.default_route, "/");
        assert_eq!(config.submit_policy, SubmitPolicy::Advisory);
    }
}
