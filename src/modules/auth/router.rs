use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{
    admin_only_page, admin_page, issue_token, register_user, user_only_page, user_page, welcome,
};
use crate::middleware::role::{require_admin, require_user};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    let public = Router::new()
        .route("/welcome", get(welcome))
        .route("/register", post(register_user))
        .route("/token", post(issue_token));

    let user_routes = Router::new()
        .route("/user", get(user_page))
        .route_layer(middleware::from_fn(require_user));

    let admin_routes = Router::new()
        .route("/admin", get(admin_page))
        .route_layer(middleware::from_fn(require_admin));

    public.merge(user_routes).merge(admin_routes)
}

/// Routes whose role checks live in the handlers, not in a route layer.
pub fn init_preauthorize_router() -> Router<AppState> {
    Router::new()
        .route("/admin-only", get(admin_only_page))
        .route("/user-only", get(user_only_page))
}
