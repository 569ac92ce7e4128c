use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::TokenScope;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::identity::CurrentPrincipal;
use crate::inbound::http::messages::MessageEnvelope;
use crate::inbound::http::router::AppState;

/// Logout everywhere: drop every authentication token of the caller.
pub async fn revoke_tokens(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<ApiSuccess<MessageEnvelope>, ApiError> {
    let user_id = principal.user_id().ok_or_else(|| {
        ApiError::Unauthorized("you must be logged in to access this route".to_string())
    })?;

    match state
        .token_service
        .revoke_all(user_id, TokenScope::Authentication)
        .await
    {
        Ok(()) => {}
        Err(TokenError::NotFound(_)) => {
            tracing::warn!("User {} had no authentication tokens to revoke", user_id);
        }
        Err(e) => return Err(ApiError::from(e)),
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageEnvelope::new("all authentication tokens revoked"),
    ))
}
