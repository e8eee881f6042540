use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use super::model::{MessageResponse, RegisterRequest, TokenRequest, TokenResponse};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::{check_any_authority, check_authority};
use crate::modules::users::model::{ROLE_ADMIN, ROLE_USER, UserResponse};
use crate::state::AppState;
use crate::validator::ValidatedJson;
use tollgate_core::AppError;

/// Public sanity endpoint; reachable without a token.
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome, this endpoint is not secure".to_string(),
    })
}

/// Register a new user
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = AuthService::register(&state.users, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticate with username/password and receive an access token
#[instrument(skip_all)]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::issue_token(&state.users, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Page for any authenticated user
pub async fn user_page(AuthUser(identity): AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("This is the user page. Access granted, {}!", identity.subject),
    })
}

/// Page for administrators only
pub async fn admin_page(AuthUser(identity): AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!(
            "This is the admin page. Access granted, {}!",
            identity.subject
        ),
    })
}

// The /preauthorize pages enforce roles inside the handler instead of behind
// a route layer. Same policy, second enforcement style.

/// Admin-only page with the role check done in the handler
pub async fn admin_only_page(
    AuthUser(identity): AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    check_authority(&identity, ROLE_ADMIN)?;
    Ok(Json(MessageResponse {
        message: "This endpoint is accessible only to the admin role.".to_string(),
    }))
}

/// User-or-admin page with the role check done in the handler
pub async fn user_only_page(
    AuthUser(identity): AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_authority(&identity, &[ROLE_USER, ROLE_ADMIN])?;
    Ok(Json(MessageResponse {
        message: "This endpoint is accessible only to the user or admin role.".to_string(),
    }))
}
