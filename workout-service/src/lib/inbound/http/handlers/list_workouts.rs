use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::workout::models::Workout;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::identity::CurrentPrincipal;
use crate::inbound::http::messages::WorkoutsEnvelope;
use crate::inbound::http::router::AppState;

pub async fn list_workouts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<WorkoutsEnvelope>, ApiError> {
    state
        .workout_service
        .list_workouts()
        .await
        .map_err(ApiError::from)
        .map(|workouts| ApiSuccess::new(StatusCode::OK, envelope(&workouts)))
}

pub async fn list_my_workouts(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<ApiSuccess<WorkoutsEnvelope>, ApiError> {
    state
        .workout_service
        .list_workouts_for(&principal)
        .await
        .map_err(ApiError::from)
        .map(|workouts| ApiSuccess::new(StatusCode::OK, envelope(&workouts)))
}

fn envelope(workouts: &[Workout]) -> WorkoutsEnvelope {
    WorkoutsEnvelope {
        workouts: workouts.iter().map(Into::into).collect(),
    }
}
