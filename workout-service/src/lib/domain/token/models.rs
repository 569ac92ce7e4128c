use chrono::DateTime;
use chrono::Utc;

pub use auth::IssuedToken;
pub use auth::TokenScope;

use crate::domain::user::models::UserId;

/// Stored form of a token: the digest, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub hash: Vec<u8>,
    pub user_id: UserId,
    pub expiry: DateTime<Utc>,
    pub scope: TokenScope,
}

impl From<&IssuedToken> for TokenRecord {
    fn from(token: &IssuedToken) -> Self {
        Self {
            hash: token.digest.clone(),
            user_id: UserId(token.user_id),
            expiry: token.expiry,
            scope: token.scope,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_record_keeps_digest_only() {
        let issued = auth::TokenIssuer::new()
            .issue(7, Duration::hours(24), TokenScope::Authentication)
            .unwrap();

        let record = TokenRecord::from(&issued);

        assert_eq!(record.hash, issued.digest);
        assert_ne!(record.hash, issued.plaintext.as_bytes());
        assert_eq!(record.user_id, UserId(7));
        assert_eq!(record.expiry, issued.expiry);
        assert_eq!(record.scope, TokenScope::Authentication);
    }
}
