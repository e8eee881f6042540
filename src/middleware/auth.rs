//! Per-request authentication filter.
//!
//! Runs once ahead of route dispatch. A valid bearer token for a known user
//! populates an [`AuthContext`] request extension; everything else continues
//! anonymously and is left to the route guards to accept or reject. The one
//! exception is a well-signed token whose subject is unknown to the identity
//! store: that failure propagates out of the filter instead of being
//! swallowed.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::modules::users::model::Identity;
use crate::state::AppState;
use tollgate_auth::{extract_subject, validate_token};
use tollgate_core::AppError;

/// Request-scoped authentication context.
///
/// Present in the request extensions only when the caller authenticated.
/// Created per request and discarded with it; never shared across requests.
#[derive(Debug, Clone)]
pub struct AuthContext(pub Identity);

/// Authentication filter middleware.
///
/// Never terminates the chain on its own: requests without a usable token
/// pass through anonymously, and whether that is acceptable is a downstream
/// authorization decision.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()).map(|t| t.to_string()) else {
        return Ok(next.run(req).await);
    };

    // A token that fails signature/structure checks is treated the same as no
    // token at all.
    let Ok(subject) = extract_subject(&token, &state.jwt_config) else {
        return Ok(next.run(req).await);
    };

    // Idempotent across filter re-entry.
    if req.extensions().get::<AuthContext>().is_none() {
        let identity = state.users.load_identity(&subject).await?;

        if validate_token(&token, &identity.subject, &state.jwt_config) {
            req.extensions_mut().insert(AuthContext(identity));
        }
    }

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor handing the authenticated identity to handlers.
///
/// Rejects with 401 when the filter left the request anonymous.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .map(|ctx| AuthUser(ctx.0.clone()))
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
