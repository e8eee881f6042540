use axum::{Router, middleware};

use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::modules::auth::router::{init_auth_router, init_preauthorize_router};
use crate::state::AppState;

/// Builds the application router.
///
/// Layer order matters: the authentication filter wraps all routes so it runs
/// before any per-route role guard, and request logging wraps everything.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", init_auth_router())
        .nest("/preauthorize", init_preauthorize_router())
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, authenticate))
        .layer(middleware::from_fn(logging_middleware))
}
