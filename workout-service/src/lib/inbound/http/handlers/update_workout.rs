use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::Metric;
use crate::domain::workout::models::UpdateWorkoutCommand;
use crate::domain::workout::models::WorkoutEntries;
use crate::domain::workout::models::WorkoutEntry;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::models::WorkoutTitle;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::identity::CurrentPrincipal;
use crate::inbound::http::messages::WorkoutEntryMessage;
use crate::inbound::http::messages::WorkoutEnvelope;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a workout (raw JSON).
///
/// Absent fields are left as stored; `entries`, when present, replaces the list.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub entries: Option<Vec<WorkoutEntryMessage>>,
}

impl UpdateWorkoutRequest {
    fn try_into_command(self) -> Result<UpdateWorkoutCommand, WorkoutError> {
        let title = self.title.map(WorkoutTitle::new).transpose()?;
        let duration_minutes = self
            .duration_minutes
            .map(|value| Metric::new("duration_minutes", value))
            .transpose()?;
        let calories_burned = self
            .calories_burned
            .map(|value| Metric::new("calories_burned", value))
            .transpose()?;
        let entries = self
            .entries
            .map(|entries| {
                WorkoutEntries::new(entries.into_iter().map(WorkoutEntry::from).collect())
            })
            .transpose()?;

        Ok(UpdateWorkoutCommand {
            title,
            description: self.description,
            duration_minutes,
            calories_burned,
            entries,
        })
    }
}

/// Update a workout the caller owns.
///
/// Ownership is settled before the body is looked at: a non-owner gets 403
/// even when the payload is malformed.
pub async fn update_workout(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
    body: Result<Json<UpdateWorkoutRequest>, JsonRejection>,
) -> Result<ApiSuccess<WorkoutEnvelope>, ApiError> {
    let workout_id = WorkoutId::from_string(&id).map_err(WorkoutError::from)?;
    state
        .workout_service
        .authorize(&principal, &workout_id)
        .await?;

    let Json(req) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let command = req.try_into_command()?;

    state
        .workout_service
        .update_workout(&principal, &workout_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref workout| {
            ApiSuccess::new(
                StatusCode::OK,
                WorkoutEnvelope {
                    workout: workout.into(),
                },
            )
        })
}
