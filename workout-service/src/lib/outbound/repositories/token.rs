use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::user::UserRecord;
use crate::domain::token::errors::TokenError;
use crate::domain::token::models::TokenRecord;
use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn insert(&self, token: &TokenRecord) -> Result<(), TokenError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO tokens (hash, user_id, expiry, scope)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&token.hash)
        .bind(token.user_id.0)
        .bind(token.expiry)
        .bind(token.scope.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| TokenError::DatabaseError(e.to_string()))
    }

    async fn find_user(
        &self,
        hash: &[u8],
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, TokenError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.bio, u.created_at, u.updated_at
            FROM users u
            INNER JOIN tokens t ON t.user_id = u.id
            WHERE t.hash = $1 AND t.scope = $2 AND t.expiry > $3
            "#,
        )
        .bind(hash)
        .bind(scope.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        record
            .map(User::try_from)
            .transpose()
            .map_err(|e| TokenError::DatabaseError(e.to_string()))
    }

    async fn delete_all_for_user(
        &self,
        user_id: UserId,
        scope: TokenScope,
    ) -> Result<(), TokenError> {
        let result = sqlx::query("DELETE FROM tokens WHERE user_id = $1 AND scope = $2")
            .bind(user_id.0)
            .bind(scope.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TokenError::NotFound(user_id));
        }

        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenError> {
        sqlx::query("DELETE FROM tokens WHERE expiry <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|e| TokenError::DatabaseError(e.to_string()))
    }
}
