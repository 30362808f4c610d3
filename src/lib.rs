//! # HireAI
//!
//! Session, routing and view-filter core of the HireAI recruitment
//! dashboard, plus the `hireai` command-line front end.
//!
//! ## Overview
//!
//! - A process-wide [`SessionStore`] holds who is signed in and notifies
//!   subscribers on every change.
//! - A [`RouteGuard`] keeps anonymous users out of protected views; the
//!   [`Navigator`] re-runs it whenever the session changes.
//! - The [`filters`] module derives what each page shows from the full
//!   record set and one selected key.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hireai::{RouteGuard, SessionStore, View};
//! use hireai::routing::Navigator;
//!
//! let store = SessionStore::new();
//! let mut navigator = Navigator::new(&store, RouteGuard::default());
//!
//! // Anonymous visitors are sent to the login page.
//! assert_eq!(navigator.navigate("/candidates").view(), View::Login);
//!
//! store.login("recruiter@example.com", "secret")?;
//! assert_eq!(navigator.navigate("/candidates").view(), View::Candidates);
//!
//! // Logging out redirects straight away.
//! store.logout();
//! assert!(navigator.sync().is_some());
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Session store, form validation, cancellable submissions
//! - [`routing`] - Views, route guard and navigator
//! - [`filters`] - Candidate, interview, job and settings filters
//! - [`fixtures`] - Demo record sets
//! - [`types`] - Records and error handling
//! - [`utils`] - TOML configuration

/// Session state and sign-in flows.
pub mod auth;
/// Command-line front end.
pub mod cli;
/// View filter engine.
pub mod filters;
/// Demo data providers.
pub mod fixtures;
/// Views, route guard and navigation.
pub mod routing;
/// Core types (records, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use auth::{AuthFlow, Authenticator, Credentials, Session, SessionStore, SignupForm};
pub use filters::{FilterKey, UnknownKeyPolicy};
pub use fixtures::{MockData, RecordSource};
pub use routing::{GuardDecision, Navigator, RouteGuard, View};
pub use types::{AppError, Result};
pub use utils::toml_config::{ConfigManager, HireConfig};
