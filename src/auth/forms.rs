//! Login and sign-up form validation
//!
//! Validation runs synchronously before any exchange is started and never
//! touches the session. Messages are meant to be shown inline as-is.

use std::fmt;

use crate::types::{AppError, Result};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Email/password pair submitted from the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AppError::Validation(FILL_ALL_FIELDS.to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fields submitted from the sign-up form.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Empty fields are reported before password length.
    pub fn validate(&self, min_password_length: usize) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(AppError::Validation(FILL_ALL_FIELDS.to_string()));
        }

        if self.password.chars().count() < min_password_length {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                min_password_length
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
