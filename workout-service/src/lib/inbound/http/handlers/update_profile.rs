use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::identity::CurrentPrincipal;
use crate::inbound::http::messages::UserEnvelope;
use crate::inbound::http::router::AppState;
use crate::domain::user::errors::UserError;

/// HTTP request body for editing the caller's profile (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, UserError> {
        let username = self.username.map(Username::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateProfileCommand {
            username,
            email,
            bio: self.bio,
        })
    }
}

pub async fn update_profile(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<UserEnvelope>, ApiError> {
    let user_id = principal.user_id().ok_or_else(|| {
        ApiError::Unauthorized("you must be logged in to access this route".to_string())
    })?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_profile(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::OK,
                UserEnvelope {
                    user: user.into(),
                },
            )
        })
}
