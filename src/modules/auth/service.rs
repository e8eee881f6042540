use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::auth::model::{RegisterRequest, TokenRequest, TokenResponse};
use crate::modules::users::model::{Role, User, UserResponse};
use crate::modules::users::store::UserStore;
use tollgate_auth::issue_token;
use tollgate_config::JwtConfig;
use tollgate_core::AppError;
use tollgate_core::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    /// Registers a new user with a hashed password.
    pub async fn register(store: &UserStore, dto: RegisterRequest) -> Result<UserResponse, AppError> {
        info!(username = %dto.username, "registering new user");

        let roles = if dto.roles.is_empty() {
            vec![Role::User]
        } else {
            dto.roles
        };

        let user = User {
            id: Uuid::new_v4(),
            username: dto.username,
            password: hash_password(&dto.password)?,
            roles,
        };

        store.insert(user.clone()).await?;
        info!(username = %user.username, "user registered");

        Ok(UserResponse::from(user))
    }

    /// Verifies credentials and issues an access token.
    pub async fn issue_token(
        store: &UserStore,
        dto: TokenRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let user = store.find(&dto.username).await.ok_or_else(|| {
            warn!(username = %dto.username, "token requested for unknown user");
            AppError::unauthorized("Invalid username or password")
        })?;

        if !verify_password(&dto.password, &user.password)? {
            warn!(username = %dto.username, "password verification failed");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let identity = user.identity();
        let access_token = issue_token(&identity.subject, &identity.roles, jwt_config)?;

        Ok(TokenResponse { access_token })
    }
}
