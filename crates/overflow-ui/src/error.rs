//! Component-level errors.

use thiserror::Error;

/// Reasons a component refuses a user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("Comment text cannot be empty")]
    EmptyComment,

    #[error("You must be logged in to comment")]
    NotLoggedIn,
}
