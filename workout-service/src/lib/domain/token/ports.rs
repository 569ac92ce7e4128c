use async_trait::async_trait;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::IssuedToken;
use crate::domain::token::models::TokenRecord;
use crate::domain::token::models::TokenScope;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for token domain service operations.
#[async_trait]
pub trait TokenServicePort: Send + Sync + 'static {
    /// Exchange a username and password for an authentication token.
    ///
    /// # Arguments
    /// * `username` - Username as typed by the client
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Issued token; its plaintext is the only copy
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password
    /// * `VerificationFailed` - Stored password hash is unusable
    /// * `EntropyFailure` - Random source failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, TokenError>;

    /// Issue and persist a token for a user.
    ///
    /// # Errors
    /// * `EntropyFailure` - Random source failed
    /// * `DatabaseError` - Database operation failed
    async fn create_token(
        &self,
        user_id: UserId,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, TokenError>;

    /// Find the user behind a presented token.
    ///
    /// # Returns
    /// `None` for unknown, expired or wrong-scope tokens
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn resolve(&self, scope: TokenScope, plaintext: &str)
        -> Result<Option<User>, TokenError>;

    /// Delete every token a user holds for a scope.
    ///
    /// # Errors
    /// * `NotFound` - The user had no tokens of that scope
    /// * `DatabaseError` - Database operation failed
    async fn revoke_all(&self, user_id: UserId, scope: TokenScope) -> Result<(), TokenError>;

    /// Remove tokens that expired before `now`.
    ///
    /// # Returns
    /// Number of deleted tokens
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenError>;
}

/// Persistence operations for tokens.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist a token digest.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, token: &TokenRecord) -> Result<(), TokenError>;

    /// Retrieve the owner of a token that is unexpired at `now`.
    ///
    /// # Arguments
    /// * `hash` - SHA-256 digest of the plaintext
    /// * `scope` - Required scope
    /// * `now` - Reference instant for expiry
    ///
    /// # Returns
    /// Optional owner (None if no live token matches)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_user(
        &self,
        hash: &[u8],
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, TokenError>;

    /// Remove all tokens of a user for a scope.
    ///
    /// # Errors
    /// * `NotFound` - No row was deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete_all_for_user(&self, user_id: UserId, scope: TokenScope)
        -> Result<(), TokenError>;

    /// Remove tokens whose expiry is not after `now`.
    ///
    /// # Returns
    /// Number of deleted rows
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenError>;
}
