use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated username, email, password and bio
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Password` - Password hashing failed
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Edit the profile of an existing user with optional fields.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `command` - Command with optional username, email and bio
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User fields; the id is assigned by storage
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Arguments
    /// * `user` - User entity with updated fields
    ///
    /// # Returns
    /// Updated user entity, with a fresh `updated_at`
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;
}
