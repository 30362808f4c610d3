//! Credential exchange seam
//!
//! [`Authenticator`] is where a real credential exchange plugs in. The demo
//! implementation accepts every well-formed submission after a fixed delay
//! that stands in for the network round trip.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::forms::{Credentials, SignupForm};
use super::session::IdentityTemplate;
use crate::types::{Identity, Result};
use crate::utils::toml_config::AuthConfig;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for an identity.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity>;

    /// Create an account. Does not sign the new user in.
    async fn register(&self, form: &SignupForm) -> Result<()>;
}

/// Accepts any submission after a simulated latency.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    template: IdentityTemplate,
    login_latency: Duration,
    signup_latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(template: IdentityTemplate, login_latency: Duration, signup_latency: Duration) -> Self {
        Self {
            template,
            login_latency,
            signup_latency,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            IdentityTemplate::from_config(config),
            config.login_latency(),
            config.signup_latency(),
        )
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity> {
        debug!(latency_ms = self.login_latency.as_millis() as u64, "Simulating login exchange");
        tokio::time::sleep(self.login_latency).await;
        Ok(self.template.issue(&credentials.email))
    }

    async fn register(&self, form: &SignupForm) -> Result<()> {
        debug!(
            email = %form.email,
            latency_ms = self.signup_latency.as_millis() as u64,
            "Simulating sign-up exchange"
        );
        tokio::time::sleep(self.signup_latency).await;
        Ok(())
    }
}
