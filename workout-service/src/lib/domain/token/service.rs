use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::IssuedToken;
use crate::domain::token::models::TokenRecord;
use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenRepository;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Domain service for login and bearer token lifecycle.
///
/// `ttl` is the lifetime given to tokens issued at login.
pub struct TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    users: Arc<UR>,
    tokens: Arc<TR>,
    authenticator: auth::Authenticator,
    ttl: Duration,
}

impl<UR, TR> TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    pub fn new(users: Arc<UR>, tokens: Arc<TR>, ttl: Duration) -> Self {
        Self {
            users,
            tokens,
            authenticator: auth::Authenticator::new(),
            ttl,
        }
    }

    async fn store(&self, token: IssuedToken) -> Result<IssuedToken, TokenError> {
        self.tokens.insert(&TokenRecord::from(&token)).await?;
        Ok(token)
    }
}

#[async_trait]
impl<UR, TR> TokenServicePort for TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, TokenError> {
        // A username that cannot exist is just another unknown user.
        let user = match Username::new(username.to_string()) {
            Ok(username) => self
                .users
                .find_by_username(&username)
                .await
                .map_err(|e| TokenError::DatabaseError(e.to_string()))?,
            Err(_) => None,
        };

        let Some(user) = user else {
            return Err(self.authenticator.reject_unknown_user(password).into());
        };

        let issued = self.authenticator.authenticate(
            password,
            &user.password_hash,
            user.id.0,
            self.ttl,
            TokenScope::Authentication,
        )?;

        let token = self.store(issued).await?;
        tracing::info!("Issued authentication token for user {}", user.id);

        Ok(token)
    }

    async fn create_token(
        &self,
        user_id: UserId,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, TokenError> {
        let issued = self.authenticator.issue_token(user_id.0, ttl, scope)?;
        self.store(issued).await
    }

    async fn resolve(
        &self,
        scope: TokenScope,
        plaintext: &str,
    ) -> Result<Option<User>, TokenError> {
        let hash = auth::TokenIssuer::digest(plaintext);
        self.tokens.find_user(&hash, scope, Utc::now()).await
    }

    async fn revoke_all(&self, user_id: UserId, scope: TokenScope) -> Result<(), TokenError> {
        self.tokens.delete_all_for_user(user_id, scope).await
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenError> {
        self.tokens.purge_expired(now).await
    }
}
