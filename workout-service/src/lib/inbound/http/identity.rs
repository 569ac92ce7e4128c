//! Per-request identity.
//!
//! The access gate stores a [`Principal`] in the request extensions; handlers
//! read it back. Nothing here outlives a single request.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Request;

use crate::domain::user::models::Principal;

/// Attach the principal to this request, replacing any earlier one.
pub fn attach<B>(request: &mut Request<B>, principal: Principal) {
    request.extensions_mut().insert(principal);
}

/// Principal of this request; `Anonymous` when none was attached.
pub fn current<B>(request: &Request<B>) -> Principal {
    request
        .extensions()
        .get::<Principal>()
        .cloned()
        .unwrap_or(Principal::Anonymous)
}

/// Extractor for the request principal. Never rejects.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPrincipal(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentPrincipal(
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .unwrap_or(Principal::Anonymous),
        ))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    fn alice() -> Principal {
        let now = Utc::now();
        Principal::Authenticated(User {
            id: UserId(1),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@x.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            bio: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    #[test]
    fn test_current_defaults_to_anonymous() {
        let request = Request::new(Body::empty());
        assert_eq!(current(&request), Principal::Anonymous);
    }

    #[test]
    fn test_attach_then_current() {
        let mut request = Request::new(Body::empty());
        attach(&mut request, alice());
        assert_eq!(current(&request).user_id(), Some(UserId(1)));

        attach(&mut request, Principal::Anonymous);
        assert!(current(&request).is_anonymous());
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_principal() {
        let mut request = Request::new(Body::empty());
        attach(&mut request, alice());
        let (mut parts, _) = request.into_parts();

        let CurrentPrincipal(principal) = CurrentPrincipal::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(principal.user_id(), Some(UserId(1)));
    }
}
