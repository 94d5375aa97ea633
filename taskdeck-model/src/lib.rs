//! Shared data model for `TaskDeck` persisted state.
//!
//! All types in this crate represent the on-disk shapes stored under the
//! `users`, `projects`, and `statuses` keys. They are serialized as JSON
//! strings via [`codec`] and validated at construction time rather than
//! silently defaulted.

pub mod codec;
pub mod ids;
pub mod project;
pub mod task;
pub mod user;

/// Error returned when a record fails validation at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field is required and was empty after trimming.
    #[error("name is required")]
    NameRequired,
    /// A task's status label was empty after trimming.
    #[error("status is required")]
    StatusRequired,
    /// The assigned-user display name was empty after trimming.
    #[error("assigned user is required")]
    AssignedUserRequired,
    /// An email address is required and was empty after trimming.
    #[error("email is required")]
    EmailRequired,
    /// A password is required and was empty.
    #[error("password is required")]
    PasswordRequired,
    /// A due date string did not parse as an ISO calendar date.
    #[error("invalid due date {0:?} (expected YYYY-MM-DD)")]
    InvalidDueDate(String),
}
