use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::token::errors::TokenError;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::workout::errors::WorkoutError;

pub mod create_token;
pub mod create_workout;
pub mod delete_workout;
pub mod get_workout;
pub mod health;
pub mod list_workouts;
pub mod register_user;
pub mod revoke_tokens;
pub mod update_profile;
pub mod update_workout;

const INTERNAL_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

/// Successful response: a status code and a JSON envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error response rendered as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    /// Log the cause and hide it from the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!("{}", cause);
        ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalServerError(msg) => msg,
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::Password(PasswordError::Empty) => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::Password(PasswordError::HashingFailed(_)) | UserError::DatabaseError(_) => {
                ApiError::internal(err)
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidCredentials => ApiError::Forbidden(err.to_string()),
            TokenError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TokenError::EntropyFailure(_)
            | TokenError::VerificationFailed(_)
            | TokenError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<WorkoutError> for ApiError {
    fn from(err: WorkoutError) -> Self {
        match err {
            WorkoutError::InvalidId(_)
            | WorkoutError::InvalidTitle(_)
            | WorkoutError::InvalidEntry(_)
            | WorkoutError::NegativeMetric { .. } => ApiError::BadRequest(err.to_string()),
            WorkoutError::AuthenticationRequired => {
                ApiError::Unauthorized("you must be logged in to access this route".to_string())
            }
            WorkoutError::NotFound(_) => ApiError::NotFound("workout not found".to_string()),
            WorkoutError::Forbidden(_) => {
                ApiError::Forbidden("you are not allowed to modify this workout".to_string())
            }
            WorkoutError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}
