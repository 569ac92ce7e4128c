use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::token::models::TokenScope;
use crate::domain::user::models::Principal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::identity;
use crate::inbound::http::router::AppState;

/// Resolve the bearer token, if any, into the request principal.
///
/// Requests without an `Authorization` header continue as `Anonymous`.
/// A header that is present but malformed, or a token that does not resolve,
/// ends the request with 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let authorization = req.headers().get(header::AUTHORIZATION).cloned();

    let principal = match resolve_principal(&state, authorization).await {
        Ok(principal) => principal,
        Err(err) => return Err(vary_on_authorization(err.into_response())),
    };

    identity::attach(&mut req, principal);

    Ok(vary_on_authorization(next.run(req).await))
}

/// Reject anonymous requests. Must run inside [`authenticate`].
pub async fn require_user(req: Request, next: Next) -> Result<Response, Response> {
    if identity::current(&req).is_anonymous() {
        return Err(ApiError::Unauthorized(
            "you must be logged in to access this route".to_string(),
        )
        .into_response());
    }

    Ok(next.run(req).await)
}

async fn resolve_principal(
    state: &AppState,
    authorization: Option<HeaderValue>,
) -> Result<Principal, ApiError> {
    let Some(header_value) = authorization else {
        return Ok(Principal::Anonymous);
    };

    let token = header_value
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| ApiError::Unauthorized("invalid auth header".to_string()))?;

    match state
        .token_service
        .resolve(TokenScope::Authentication, token)
        .await
    {
        Ok(Some(user)) => Ok(Principal::Authenticated(user)),
        Ok(None) => {
            tracing::debug!("Presented bearer token did not resolve");
            Err(ApiError::Unauthorized("invalid token".to_string()))
        }
        Err(e) => Err(ApiError::internal(e)),
    }
}

/// Token part of `Bearer <token>`; any other shape is rejected.
fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

fn vary_on_authorization(mut response: Response) -> Response {
    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static("Authorization"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_shape() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("Bearer "), Some(""));

        assert_eq!(bearer_token("Token abc123"), None);
        assert_eq!(bearer_token("bearer abc123"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer abc 123"), None);
        assert_eq!(bearer_token("Bearer  abc123"), None);
    }
}
