//! Session store
//!
//! The single source of truth for "is someone signed in, and as whom". The
//! session lives in a `tokio::sync::watch` channel so readers can either peek
//! at the current value or subscribe and react to every change.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

use super::forms::Credentials;
use crate::fixtures::DEMO_AVATAR;
use crate::types::{Identity, Result, Role};
use crate::utils::toml_config::AuthConfig;

/// The two states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Current authentication state. Authenticated exactly when an identity is
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// How demo identities are fabricated from a login email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityTemplate {
    pub display_name: String,
    pub role: Role,
    pub avatar_ref: String,
}

impl Default for IdentityTemplate {
    fn default() -> Self {
        Self {
            display_name: "Demo User".to_string(),
            role: Role::Admin,
            avatar_ref: DEMO_AVATAR.to_string(),
        }
    }
}

impl IdentityTemplate {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            display_name: config.demo_display_name.clone(),
            role: config.role(),
            ..Self::default()
        }
    }

    /// A fresh identity for `email`.
    pub fn issue(&self, email: &str) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            display_name: self.display_name.clone(),
            email: email.to_string(),
            role: self.role,
            avatar_ref: self.avatar_ref.clone(),
        }
    }
}

/// Process-wide session holder. Clones share the same session.
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Session>>,
    template: Arc<IdentityTemplate>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// An anonymous session with the default demo identity template.
    pub fn new() -> Self {
        Self::with_template(IdentityTemplate::default())
    }

    pub fn with_template(template: IdentityTemplate) -> Self {
        let (tx, _rx) = watch::channel(Session::anonymous());
        Self {
            tx: Arc::new(tx),
            template: Arc::new(template),
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.tx.borrow().identity().cloned()
    }

    /// Receiver notified on every session transition.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    pub fn template(&self) -> &IdentityTemplate {
        &self.template
    }

    /// Immediate demo login: any non-empty email/password pair succeeds and
    /// yields an identity carrying the email exactly as supplied. Empty fields are a
    /// validation error and leave the session untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<Identity> {
        Credentials::new(email, password).validate()?;
        let identity = self.template.issue(email);
        self.sign_in(identity.clone());
        Ok(identity)
    }

    /// Install `identity`, replacing any previous one wholesale.
    pub fn sign_in(&self, identity: Identity) {
        info!(email = %identity.email, role = %identity.role, "Signed in");
        self.tx.send_replace(Session::authenticated(identity));
    }

    /// Return to anonymous. Idempotent: subscribers are only notified when a
    /// session was actually cleared.
    pub fn logout(&self) {
        let cleared = self.tx.send_if_modified(|session| session.identity.take().is_some());
        if cleared {
            info!("Signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    #[test]
    fn test_starts_anonymous() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.current().state(), SessionState::Anonymous);
        assert!(store.identity().is_none());
    }

    #[test]
    fn test_login_fabricates_identity_from_email() {
        let store = SessionStore::new();
        let identity = store.login("recruiter@example.com", "hunter22").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(identity.email, "recruiter@example.com");
        assert_eq!(identity.display_name, "Demo User");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(store.identity(), Some(identity));
    }

    #[test]
    fn test_empty_password_keeps_session_anonymous() {
        let store = SessionStore::new();
        let err = store.login("recruiter@example.com", "").unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Please fill in all fields"));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_padded_email_is_kept_verbatim() {
        let store = SessionStore::new();
        let identity = store.login(" a@example.com ", "pw").unwrap();

        assert_eq!(identity.email, " a@example.com ");
        assert_eq!(store.identity().unwrap().email, " a@example.com ");
    }

    #[test]
    fn test_second_login_replaces_identity() {
        let store = SessionStore::new();
        let first = store.login("a@example.com", "pw").unwrap();
        let second = store.login("b@example.com", "pw").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.identity().unwrap().email, "b@example.com");
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = SessionStore::new();
        store.login("a@example.com", "pw").unwrap();

        store.logout();
        let after_once = store.current();
        store.logout();

        assert_eq!(store.current(), after_once);
        assert_eq!(after_once, Session::anonymous());
    }

    #[test]
    fn test_logout_from_anonymous_does_not_notify() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.logout();
        assert!(!rx.has_changed().unwrap());

        store.login("a@example.com", "pw").unwrap();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        store.logout();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();

        store.login("a@example.com", "pw").unwrap();
        assert!(other.is_authenticated());

        other.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_template_from_config() {
        let config = AuthConfig {
            demo_display_name: "Riley Recruiter".to_string(),
            demo_role: "recruiter".to_string(),
            ..AuthConfig::default()
        };
        let store = SessionStore::with_template(IdentityTemplate::from_config(&config));
        let identity = store.login("riley@example.com", "pw").unwrap();

        assert_eq!(identity.display_name, "Riley Recruiter");
        assert_eq!(identity.role, Role::Recruiter);
    }
}
