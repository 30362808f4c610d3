//! Session state and sign-in flows
//!
//! # Module Structure
//!
//! - [`auth::session`](crate::auth::session) - the process-wide [`SessionStore`]
//! - [`auth::forms`](crate::auth::forms) - login and sign-up form validation
//! - [`auth::authenticator`](crate::auth::authenticator) - the credential exchange seam
//! - [`auth::flow`](crate::auth::flow) - cancellable submissions with a busy indicator
//!
//! # Usage
//!
//! ```ignore
//! use hireai::auth::{AuthFlow, Credentials, SessionStore};
//!
//! let store = SessionStore::new();
//! let flow = AuthFlow::from_config(store.clone(), &config.auth);
//! let identity = flow
//!     .submit_login(Credentials::new("demo@example.com", "secret"))?
//!     .wait()
//!     .await?;
//! assert!(store.is_authenticated());
//! ```

/// Credential exchange trait and the demo implementation.
pub mod authenticator;
/// Login/sign-up submission handling.
pub mod flow;
/// Form validation.
pub mod forms;
/// Session state and store.
pub mod session;

pub use authenticator::{Authenticator, DemoAuthenticator};
pub use flow::{AuthFlow, Submission};
pub use forms::{Credentials, SignupForm};
pub use session::{IdentityTemplate, Session, SessionState, SessionStore};
