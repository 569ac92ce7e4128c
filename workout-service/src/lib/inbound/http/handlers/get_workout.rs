use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::WorkoutId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::WorkoutEnvelope;
use crate::inbound::http::router::AppState;

pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<WorkoutEnvelope>, ApiError> {
    let workout_id = WorkoutId::from_string(&id).map_err(WorkoutError::from)?;

    state
        .workout_service
        .get_workout(&workout_id)
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
