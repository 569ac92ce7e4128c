use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::errors::UserError;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, bio, created_at, updated_at";

/// Row of the `users` table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRecord {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    bio: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = UserError;

    fn try_from(r: UserRecord) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(r.id),
            username: Username::new(r.username)?,
            email: EmailAddress::new(r.email)?,
            password_hash: r.password_hash,
            bio: r.bio,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, username: &Username, email: &EmailAddress) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("users_username_key") {
                return UserError::UsernameAlreadyExists(username.as_str().to_string());
            }
            if db_err.constraint() == Some("users_email_key") {
                return UserError::EmailAlreadyExists(email.as_str().to_string());
            }
        }
    }
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user.username, &user.email))?;

        User::try_from(record)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?
        .map(User::try_from)
        .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?
        .map(User::try_from)
        .transpose()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, bio = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user.username, &user.email))?
        .ok_or(UserError::NotFound(user.id))?;

        User::try_from(record)
    }
}
