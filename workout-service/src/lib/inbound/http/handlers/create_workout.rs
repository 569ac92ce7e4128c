use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::models::Metric;
use crate::domain::workout::models::WorkoutEntries;
use crate::domain::workout::models::WorkoutEntry;
use crate::domain::workout::models::WorkoutTitle;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::identity::CurrentPrincipal;
use crate::inbound::http::messages::WorkoutEntryMessage;
use crate::inbound::http::messages::WorkoutEnvelope;
use crate::inbound::http::router::AppState;

/// HTTP request body for creating a workout (raw JSON)
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default)]
    pub entries: Vec<WorkoutEntryMessage>,
}

impl CreateWorkoutRequest {
    fn try_into_command(self) -> Result<CreateWorkoutCommand, WorkoutError> {
        Ok(CreateWorkoutCommand {
            title: WorkoutTitle::new(self.title)?,
            description: self.description,
            duration_minutes: Metric::new("duration_minutes", self.duration_minutes)?,
            calories_burned: Metric::new("calories_burned", self.calories_burned)?,
            entries: WorkoutEntries::new(
                self.entries.into_iter().map(WorkoutEntry::from).collect(),
            )?,
        })
    }
}

pub async fn create_workout(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<ApiSuccess<WorkoutEnvelope>, ApiError> {
    let command = req.try_into_command()?;

    state
        .workout_service
        .create_workout(&principal, command)
        .await
        .map_err(ApiError::from)
        .map(|ref workout| {
            ApiSuccess::new(
                StatusCode::CREATED,
                WorkoutEnvelope {
                    workout: workout.into(),
                },
            )
        })
}
