//! User directory and session context.
//!
//! Accounts gate nothing security-critical; they exist so the board can
//! attribute work. The signed-in user's display name becomes the
//! default assignee for new tasks. Credentials are compared against
//! plaintext stored records, and login failures are deliberately
//! indistinguishable: an unknown email and a wrong password produce the
//! same error.

use std::sync::Arc;

use thiserror::Error;

use taskdeck_model::ValidationError;
use taskdeck_model::codec;
use taskdeck_model::user::User;

use crate::storage::Storage;

/// Storage key holding the serialized user list.
pub const USERS_KEY: &str = "users";

/// Errors that can occur during registration and login.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Another account already uses this email.
    #[error("email is already registered")]
    EmailTaken,
    /// Email/password pair did not match any account.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A required field was missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Store for registered users, backed by injected [`Storage`].
pub struct UserDirectory {
    storage: Arc<dyn Storage>,
}

impl UserDirectory {
    /// Creates a directory over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn load_all(&self) -> Vec<User> {
        let Some(raw) = self.storage.get(USERS_KEY) else {
            return Vec::new();
        };
        match codec::decode(&raw) {
            Ok(users) => users,
            Err(err) => {
                tracing::warn!(error = %err, "stored users unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save_all(&self, users: &[User]) {
        match codec::encode(&users) {
            Ok(json) => self.storage.set(USERS_KEY, &json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode users, skipping persist");
            }
        }
    }

    /// Registers a new account and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when a field is missing, or
    /// [`AuthError::EmailTaken`] when the email is already registered.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let user = User::new(name, email, password)?;
        let mut users = self.load_all();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        self.save_all(&users);
        Ok(user)
    }

    /// Looks up an account by email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair matches
    /// no account. Unknown email and wrong password are not
    /// distinguished.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        self.load_all()
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// The signed-in user for this run of the app.
pub struct Session {
    user: User,
}

impl Session {
    /// Starts a session for an authenticated user.
    #[must_use]
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The signed-in user.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Display name used as the default assignee on new tasks.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.user.name
    }
}
