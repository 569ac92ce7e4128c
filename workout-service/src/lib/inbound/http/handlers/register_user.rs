use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::messages::UserEnvelope;
use crate::inbound::http::router::AppState;
use crate::domain::user::errors::UserError;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<UserEnvelope>, ApiError> {
    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                UserEnvelope {
                    user: user.into(),
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    bio: String,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        Ok(CreateUserCommand {
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            password: Password::new(self.password)?,
            bio: self.bio,
        })
    }
}
