use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use uuid::Uuid;

use tollgate::modules::users::model::{Role, User};
use tollgate::modules::users::store::UserStore;
use tollgate::router::init_router;
use tollgate::state::AppState;
use tollgate_config::JwtConfig;
use tollgate_core::password::hash_password;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::from_secret(b"integration-test-signing-key-0123456789".to_vec())
}

pub fn test_state() -> AppState {
    AppState {
        jwt_config: test_jwt_config(),
        users: UserStore::new(),
    }
}

pub fn setup_test_app(state: AppState) -> Router {
    init_router(state)
}

pub async fn seed_user(state: &AppState, username: &str, password: &str, roles: Vec<Role>) -> User {
    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password: hash_password(password).unwrap(),
        roles,
    };
    state.users.insert(user.clone()).await.unwrap();
    user
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
