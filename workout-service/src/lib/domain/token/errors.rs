use thiserror::Error;

use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Unknown user or wrong password; the two are never told apart.
    #[error("invalid authentication credentials")]
    InvalidCredentials,

    #[error("No tokens found for user {0}")]
    NotFound(UserId),

    #[error("Token generation failed: {0}")]
    EntropyFailure(String),

    #[error("Credential verification failed: {0}")]
    VerificationFailed(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::AuthenticationError> for TokenError {
    fn from(error: auth::AuthenticationError) -> Self {
        match error {
            auth::AuthenticationError::InvalidCredentials => TokenError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => {
                TokenError::VerificationFailed(e.to_string())
            }
            auth::AuthenticationError::TokenError(e) => TokenError::EntropyFailure(e.to_string()),
        }
    }
}

impl From<auth::TokenError> for TokenError {
    fn from(error: auth::TokenError) -> Self {
        TokenError::EntropyFailure(error.to_string())
    }
}
