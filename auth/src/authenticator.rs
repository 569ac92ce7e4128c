use std::sync::OnceLock;

use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::IssuedToken;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenScope;

/// Login coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the user on success.
    ///
    /// # Arguments
    /// * `password` - Plaintext password presented at login
    /// * `stored_hash` - Digest stored for the user
    /// * `user_id` - Token owner
    /// * `ttl` - Token lifetime
    /// * `scope` - Token purpose
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored digest is corrupt
    /// * `TokenError` - Random source failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(user_id, ttl, scope)?)
    }

    /// Spend the same work as a real verification for a login whose user does
    /// not exist, then report invalid credentials.
    ///
    /// Keeps "unknown user" and "wrong password" indistinguishable by timing.
    pub fn reject_unknown_user(&self, password: &str) -> AuthenticationError {
        if let Some(hash) = dummy_hash(&self.password_hasher) {
            let _ = self.password_hasher.verify(password, hash);
        }
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without checking a password.
    ///
    /// # Errors
    /// * `TokenError` - Random source failed
    pub fn issue_token(
        &self,
        user_id: i64,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, TokenError> {
        self.token_issuer.issue(user_id, ttl, scope)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

fn dummy_hash(hasher: &PasswordHasher) -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hasher.hash("dummy-password-for-timing").ok())
        .as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new();

        let hash = authenticator
            .hash_password("secret1")
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate(
                "secret1",
                &hash,
                42,
                Duration::hours(24),
                TokenScope::Authentication,
            )
            .expect("Authentication failed");

        assert_eq!(token.user_id, 42);
        assert_eq!(token.scope, TokenScope::Authentication);
        assert!(!token.plaintext.is_empty());
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new();
        let hash = authenticator.hash_password("secret1").unwrap();

        let result = authenticator.authenticate(
            "wrong",
            &hash,
            42,
            Duration::hours(24),
            TokenScope::Authentication,
        );

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = Authenticator::new();

        let result = authenticator.authenticate(
            "secret1",
            "not-a-phc-string",
            42,
            Duration::hours(24),
            TokenScope::Authentication,
        );

        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_reject_unknown_user_reports_invalid_credentials() {
        let authenticator = Authenticator::new();

        assert!(matches!(
            authenticator.reject_unknown_user("whatever"),
            AuthenticationError::InvalidCredentials
        ));
    }
}
