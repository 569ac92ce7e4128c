use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::token::models::IssuedToken;
use crate::inbound::http::router::AppState;

/// Login: exchange username and password for a bearer token.
///
/// Unknown users and wrong passwords both answer 403.
pub async fn create_token(
    State(state): State<AppState>,
    Json(body): Json<CreateTokenRequest>,
) -> Result<ApiSuccess<CreateTokenResponseData>, ApiError> {
    state
        .token_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::OK, token.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTokenRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub token: String,
    pub expiry: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTokenResponseData {
    pub token: TokenData,
}

impl From<&IssuedToken> for CreateTokenResponseData {
    fn from(token: &IssuedToken) -> Self {
        Self {
            token: TokenData {
                token: token.plaintext.clone(),
                expiry: token.expiry,
            },
        }
    }
}
