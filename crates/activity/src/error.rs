//! Error types for the activity crate.

use catalog::UserId;
use thiserror::Error;

/// Errors raised by the user directory.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityError {
    /// A user with this id is already registered
    #[error("user {id} is already registered")]
    DuplicateUser { id: UserId },

    /// The user is required to exist but is not registered
    #[error("user {id} was not found")]
    UserNotFound { id: UserId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ActivityError>;
