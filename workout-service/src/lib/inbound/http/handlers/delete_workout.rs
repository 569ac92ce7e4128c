use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::WorkoutId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::identity::CurrentPrincipal;
use crate::inbound::http::messages::MessageEnvelope;
use crate::inbound::http::router::AppState;

pub async fn delete_workout(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageEnvelope>, ApiError> {
    let workout_id = WorkoutId::from_string(&id).map_err(WorkoutError::from)?;

    state
        .workout_service
        .delete_workout(&principal, &workout_id)
        .await
        .map_err(ApiError::from)
        .map(|()| ApiSuccess::new(StatusCode::OK, MessageEnvelope::new("workout deleted")))
}
