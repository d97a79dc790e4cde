//! User registration input

use super::validation::{require_text, ValidationError};

/// Trim surrounding whitespace from an email and reject blanks.
///
/// Registration and lookup both go through this, so a stored email always
/// matches what a later lookup searches for.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    require_text("email", raw)?;
    Ok(raw.trim().to_owned())
}

/// Validated user registration.
///
/// Email uniqueness is not checked here; the `users.email` UNIQUE
/// constraint is the only guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    email: String,
    username: String,
}

impl NewUser {
    pub fn new(email: String, username: String) -> Result<Self, ValidationError> {
        let email = normalize_email(&email)?;
        require_text("username", &username)?;
        Ok(Self { email, username })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
