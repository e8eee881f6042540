use anyhow::Result;

use crate::modules::users::store::UserStore;
use tollgate_config::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub users: UserStore,
}

/// Builds the shared state. Fails when the signing secret is missing or
/// malformed; the server must not start in that case.
pub fn init_app_state() -> Result<AppState> {
    Ok(AppState {
        jwt_config: JwtConfig::from_env()?,
        users: UserStore::new(),
    })
}
