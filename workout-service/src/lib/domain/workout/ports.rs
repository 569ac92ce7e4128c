use async_trait::async_trait;

use crate::domain::user::models::Principal;
use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::UpdateWorkoutCommand;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;

/// Port for workout domain service operations.
///
/// Mutations take the request principal and enforce ownership in this order:
/// anonymous callers are rejected first, then a missing workout is reported,
/// then a foreign owner is refused.
#[async_trait]
pub trait WorkoutServicePort: Send + Sync + 'static {
    /// Check that the principal may mutate an existing workout.
    ///
    /// Callers run this before validating a mutation payload so that a
    /// non-owner is refused whatever they sent.
    ///
    /// # Returns
    /// Id of the owner, who is the principal
    ///
    /// # Errors
    /// * `AuthenticationRequired` - Principal is anonymous
    /// * `NotFound` - Workout does not exist
    /// * `Forbidden` - Workout belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn authorize(&self, principal: &Principal, id: &WorkoutId)
        -> Result<UserId, WorkoutError>;

    /// Create a workout owned by the principal.
    ///
    /// # Errors
    /// * `AuthenticationRequired` - Principal is anonymous
    /// * `DatabaseError` - Database operation failed
    async fn create_workout(
        &self,
        principal: &Principal,
        command: CreateWorkoutCommand,
    ) -> Result<Workout, WorkoutError>;

    /// Retrieve a workout with its entries.
    ///
    /// # Errors
    /// * `NotFound` - Workout does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_workout(&self, id: &WorkoutId) -> Result<Workout, WorkoutError>;

    /// Retrieve every workout.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_workouts(&self) -> Result<Vec<Workout>, WorkoutError>;

    /// Retrieve the workouts owned by the principal.
    ///
    /// # Errors
    /// * `AuthenticationRequired` - Principal is anonymous
    /// * `DatabaseError` - Database operation failed
    async fn list_workouts_for(&self, principal: &Principal)
        -> Result<Vec<Workout>, WorkoutError>;

    /// Apply a partial update to a workout the principal owns.
    ///
    /// # Errors
    /// * `AuthenticationRequired` - Principal is anonymous
    /// * `NotFound` - Workout does not exist
    /// * `Forbidden` - Workout belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn update_workout(
        &self,
        principal: &Principal,
        id: &WorkoutId,
        command: UpdateWorkoutCommand,
    ) -> Result<Workout, WorkoutError>;

    /// Delete a workout the principal owns, entries included.
    ///
    /// # Errors
    /// * `AuthenticationRequired` - Principal is anonymous
    /// * `NotFound` - Workout does not exist
    /// * `Forbidden` - Workout belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_workout(&self, principal: &Principal, id: &WorkoutId)
        -> Result<(), WorkoutError>;
}

/// Persistence operations for the workout aggregate.
///
/// Writes touching the header and its entries are atomic.
#[async_trait]
pub trait WorkoutRepository: Send + Sync + 'static {
    /// Persist header and entries together.
    ///
    /// # Returns
    /// Stored workout with its assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed; nothing was stored
    async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError>;

    /// Retrieve workout by identifier.
    ///
    /// # Returns
    /// Optional workout (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &WorkoutId) -> Result<Option<Workout>, WorkoutError>;

    /// Retrieve all workouts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Workout>, WorkoutError>;

    /// Retrieve all workouts of one owner, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, user_id: &UserId) -> Result<Vec<Workout>, WorkoutError>;

    /// Overwrite the header and replace the full entry set.
    ///
    /// # Returns
    /// Updated workout, with a fresh `updated_at`
    ///
    /// # Errors
    /// * `NotFound` - Workout does not exist; nothing was changed
    /// * `DatabaseError` - Database operation failed; nothing was changed
    async fn update(&self, workout: Workout) -> Result<Workout, WorkoutError>;

    /// Remove a workout; its entries go with it.
    ///
    /// # Errors
    /// * `NotFound` - Workout does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &WorkoutId) -> Result<(), WorkoutError>;

    /// Retrieve the owner of a workout.
    ///
    /// # Returns
    /// Optional owner id (None if the workout does not exist)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_owner(&self, id: &WorkoutId) -> Result<Option<UserId>, WorkoutError>;
}
