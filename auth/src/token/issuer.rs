use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Digest;
use sha2::Sha256;

use super::errors::TokenError;
use super::scope::TokenScope;

/// Number of random bytes behind every token.
pub const TOKEN_BYTES: usize = 32;

/// Freshly issued bearer token.
///
/// `plaintext` exists only in this value: it goes back to the client once and is
/// never stored. `digest` is what gets persisted and looked up.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub plaintext: String,
    pub digest: Vec<u8>,
    pub user_id: i64,
    pub scope: TokenScope,
    pub expiry: DateTime<Utc>,
}

// Keep the plaintext out of logs and panic messages.
impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("plaintext", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("scope", &self.scope)
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Opaque bearer token generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Owner of the token
    /// * `ttl` - Lifetime, counted from now
    /// * `scope` - Purpose tag
    ///
    /// # Errors
    /// * `EntropyFailure` - The OS random source could not supply bytes
    pub fn issue(
        &self,
        user_id: i64,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, TokenError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenError::EntropyFailure(e.to_string()))?;

        let plaintext = URL_SAFE_NO_PAD.encode(bytes);
        let digest = Self::digest(&plaintext);

        Ok(IssuedToken {
            plaintext,
            digest,
            user_id,
            scope,
            expiry: Utc::now() + ttl,
        })
    }

    /// SHA-256 of a token plaintext; the only form of a token that is ever stored.
    pub fn digest(plaintext: &str) -> Vec<u8> {
        Sha256::digest(plaintext.as_bytes()).to_vec()
    }
}
