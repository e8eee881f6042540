//! Signed claim set carried by access tokens.

use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: username (subject)
/// - `roles`: comma-joined authority strings (e.g. `"ROLE_USER,ROLE_ADMIN"`)
/// - `iat`: issued-at timestamp (Unix seconds)
/// - `exp`: expiration timestamp (Unix seconds), always `iat` + the fixed TTL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject claim)
    pub sub: String,
    /// Comma-joined authorities granted to the subject
    pub roles: String,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
}

impl Claims {
    /// Splits the `roles` claim back into individual authority strings.
    pub fn authorities(&self) -> Vec<String> {
        self.roles
            .split(',')
            .filter(|r| !r.is_empty())
            .map(|r| r.to_string())
            .collect()
    }
}
