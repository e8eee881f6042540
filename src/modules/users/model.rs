//! User records, roles, and the resolved caller identity.
//!
//! A stored [`User`] is what the identity store persists; an [`Identity`] is
//! the principal handed to the authorization layer. The mapping between the
//! two is explicit: [`User::identity`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authority string granted to every regular user.
pub const ROLE_USER: &str = "ROLE_USER";
/// Authority string granted to administrators.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// System roles assignable to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// The `ROLE_`-prefixed authority string used in tokens and route guards.
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }

}

/// A user record held by the identity store.
///
/// `password` is a bcrypt hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl User {
    /// Maps the stored record to the principal used for authorization.
    pub fn identity(&self) -> Identity {
        Identity {
            subject: self.username.clone(),
            roles: self
                .roles
                .iter()
                .map(|role| role.authority().to_string())
                .collect(),
        }
    }
}

/// The resolved caller: subject plus granted authorities.
///
/// Constructed fresh per request from the identity store; immutable once
/// built and never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.roles.iter().any(|role| role == authority)
    }
}

/// User shape returned by the API. Omits the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<Role>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            roles: user.roles,
        }
    }
}
