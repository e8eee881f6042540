//! Role-based route guards.
//!
//! Applied as `route_layer`s after [`crate::middleware::auth::authenticate`]
//! has run. Anonymous requests to a guarded route get 401; authenticated
//! requests lacking the required authority get 403.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthContext;
use crate::modules::users::model::{Identity, ROLE_ADMIN, ROLE_USER};
use tollgate_core::AppError;

async fn require_authorities(
    req: Request,
    next: Next,
    allowed: &[&str],
) -> Result<Response, AppError> {
    let identity = req
        .extensions()
        .get::<AuthContext>()
        .map(|ctx| ctx.0.clone())
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    check_any_authority(&identity, allowed)?;

    Ok(next.run(req).await)
}

/// Guard for routes open to any authenticated user.
pub async fn require_user(req: Request, next: Next) -> Response {
    match require_authorities(req, next, &[ROLE_USER, ROLE_ADMIN]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Guard for admin-only routes.
pub async fn require_admin(req: Request, next: Next) -> Response {
    match require_authorities(req, next, &[ROLE_ADMIN]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Checks a single authority on an identity.
pub fn check_authority(identity: &Identity, authority: &str) -> Result<(), AppError> {
    if !identity.has_authority(authority) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required authority: {}",
            authority
        )));
    }
    Ok(())
}

/// Checks that the identity holds at least one of the allowed authorities.
pub fn check_any_authority(identity: &Identity, allowed: &[&str]) -> Result<(), AppError> {
    if !allowed.iter().any(|a| identity.has_authority(a)) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_with(roles: &[&str]) -> Identity {
        Identity {
            subject: "test".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_check_authority_match() {
        let identity = identity_with(&[ROLE_USER]);
        assert!(check_authority(&identity, ROLE_USER).is_ok());
    }

    #[test]
    fn test_check_authority_mismatch() {
        let identity = identity_with(&[ROLE_USER]);
        assert!(check_authority(&identity, ROLE_ADMIN).is_err());
    }

    #[test]
    fn test_check_any_authority() {
        let identity = identity_with(&[ROLE_ADMIN]);
        assert!(check_any_authority(&identity, &[ROLE_USER, ROLE_ADMIN]).is_ok());
        assert!(check_any_authority(&identity, &[ROLE_USER]).is_err());
        assert!(check_any_authority(&identity, &[]).is_err());
    }
}
