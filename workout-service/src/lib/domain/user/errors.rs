use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username is required")]
    Empty,

    #[error("username must be at most {max} characters long, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is required")]
    Empty,

    #[error("email is not well formatted: {0}")]
    InvalidFormat(String),
}

/// Error for password operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password is required")]
    Empty,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordError),

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
