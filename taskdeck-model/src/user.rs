//! The user account record.
//!
//! Accounts exist to attribute work: a signed-in user's name becomes the
//! default assignee on new tasks. Passwords are stored as-is in the
//! backing store; there is no hashing layer.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, used as the default task assignee.
    pub name: String,
    /// Login email. Unique across the directory.
    pub email: String,
    /// Login password, stored in plaintext.
    pub password: String,
}

impl User {
    /// Creates a user record, trimming the name and email.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`],
    /// [`ValidationError::EmailRequired`], or
    /// [`ValidationError::PasswordRequired`] when a field is empty.
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
