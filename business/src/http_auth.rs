//! `reqwest` backed [`Authenticator`].

use async_trait::async_trait;
use log::{info, warn};
use reqwest::StatusCode;
use serde::Serialize;

use crate::{AuthError, Authenticator, BusinessConfig};

/// Request payload for the password sign-in endpoint.
#[derive(Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Posts credentials to `{api_url}/auth/login`.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthenticator {
    pub fn new(config: &BusinessConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &BusinessConfig) -> Self {
        Self {
            client,
            url: format!("{}/auth/login", config.api_url()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(&self.url)
            .json(&SignInRequest {
                email: identifier,
                password: secret,
            })
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!("HttpAuthenticator: sign-in accepted");
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(AuthError::InvalidCredentials)
        } else {
            warn!("HttpAuthenticator: unexpected status {status}");
            Err(AuthError::Server {
                status: status.as_u16(),
            })
        }
    }
}
