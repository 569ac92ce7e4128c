use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::Principal;
use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::UpdateWorkoutCommand;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutRepository;
use crate::domain::workout::ports::WorkoutServicePort;

/// Domain service implementation for workout operations.
pub struct WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    repository: Arc<WR>,
}

impl<WR> WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<WR> WorkoutServicePort for WorkoutService<WR>
where
    WR: WorkoutRepository,
{
    async fn authorize(
        &self,
        principal: &Principal,
        id: &WorkoutId,
    ) -> Result<UserId, WorkoutError> {
        let user_id = principal
            .user_id()
            .ok_or(WorkoutError::AuthenticationRequired)?;

        let owner = self
            .repository
            .find_owner(id)
            .await?
            .ok_or(WorkoutError::NotFound(*id))?;

        if owner != user_id {
            tracing::warn!(
                "User {} attempted to modify workout {} owned by {}",
                user_id,
                id,
                owner
            );
            return Err(WorkoutError::Forbidden(*id));
        }

        Ok(user_id)
    }

    async fn create_workout(
        &self,
        principal: &Principal,
        command: CreateWorkoutCommand,
    ) -> Result<Workout, WorkoutError> {
        let user_id = principal
            .user_id()
            .ok_or(WorkoutError::AuthenticationRequired)?;

        let workout = self
            .repository
            .create(NewWorkout {
                user_id,
                title: command.title,
                description: command.description,
                duration_minutes: command.duration_minutes,
                calories_burned: command.calories_burned,
                entries: command.entries,
            })
            .await?;

        tracing::info!(
            "User {} created workout {} with {} entries",
            user_id,
            workout.id,
            workout.entries.len()
        );

        Ok(workout)
    }

    async fn get_workout(&self, id: &WorkoutId) -> Result<Workout, WorkoutError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WorkoutError::NotFound(*id))
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, WorkoutError> {
        self.repository.list_all().await
    }

    async fn list_workouts_for(
        &self,
        principal: &Principal,
    ) -> Result<Vec<Workout>, WorkoutError> {
        let user_id = principal
            .user_id()
            .ok_or(WorkoutError::AuthenticationRequired)?;

        self.repository.list_by_owner(&user_id).await
    }

    async fn update_workout(
        &self,
        principal: &Principal,
        id: &WorkoutId,
        command: UpdateWorkoutCommand,
    ) -> Result<Workout, WorkoutError> {
        self.authorize(principal, id).await?;

        let mut workout = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(WorkoutError::NotFound(*id))?;

        if let Some(title) = command.title {
            workout.title = title;
        }

        if let Some(description) = command.description {
            workout.description = description;
        }

        if let Some(duration_minutes) = command.duration_minutes {
            workout.duration_minutes = duration_minutes;
        }

        if let Some(calories_burned) = command.calories_burned {
            workout.calories_burned = calories_burned;
        }

        if let Some(entries) = command.entries {
            workout.entries = entries;
        }

        self.repository.update(workout).await
    }

    async fn delete_workout(
        &self,
        principal: &Principal,
        id: &WorkoutId,
    ) -> Result<(), WorkoutError> {
        let user_id = self.authorize(principal, id).await?;

        self.repository.delete(id).await?;
        tracing::info!("User {} deleted workout {}", user_id, id);

        Ok(())
    }
}
