use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
                bio: command.bio,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(*id))?;

        if let Some(username) = command.username {
            user.username = username;
        }

        if let Some(email) = command.email {
            user.email = email;
        }

        if let Some(bio) = command.bio {
            user.bio = bio;
        }

        self.repository.update(user).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Password;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
        }
    }

    fn stored(new_user: NewUser) -> User {
        let now = Utc::now();
        User {
            id: UserId(1),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            bio: new_user.bio,
            created_at: now,
            updated_at: now,
        }
    }

    fn alice() -> User {
        stored(NewUser {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@x.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            bio: String::new(),
        })
    }

    fn register_command(username: &str, email: &str) -> CreateUserCommand {
        CreateUserCommand {
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password: Password::new("secret1".to_string()).unwrap(),
            bio: String::new(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "alice@x.com"
                    && user.password_hash.starts_with("$argon2id$")
                    && user.password_hash != "secret1"
            })
            .times(1)
            .returning(|user| Ok(stored(user)));

        let service = UserService::new(Arc::new(repository));

        let user = service
            .register(register_command("alice", "alice@x.com"))
            .await
            .unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.username.as_str(), "alice");
        assert!(auth::PasswordHasher::new()
            .verify("secret1", &user.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("alice", "other@x.com"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service.register(register_command("bob", "alice@x.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_update_profile_merges_fields() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(1))
            .times(1)
            .returning(|_| Ok(Some(alice())));

        repository
            .expect_update()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "alice@x.com"
                    && user.bio == "squats daily"
                    && user.password_hash == "$argon2id$test_hash"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateProfileCommand {
            bio: Some("squats daily".to_string()),
            ..Default::default()
        };

        let user = service.update_profile(&UserId(1), command).await.unwrap();
        assert_eq!(user.bio, "squats daily");
    }

    #[tokio::test]
    async fn test_update_profile_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .update_profile(&UserId(42), UpdateProfileCommand::default())
            .await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(UserId(42))));
    }
}
