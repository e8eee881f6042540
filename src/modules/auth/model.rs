use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::modules::users::model::Role;

pub const PASSWORD_REQUIREMENTS: &str = "Password must be at least 8 characters long, contain at least one uppercase letter, one lowercase letter, and one number.";

/// Minimum strength rule for new passwords.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_upper && has_lower && has_digit) {
        let mut err = ValidationError::new("password_strength");
        err.message = Some(PASSWORD_REQUIREMENTS.into());
        return Err(err);
    }
    Ok(())
}

// Registration request structure
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(custom(function = validate_password_strength))]
    pub password: String,
    /// Roles to assign. Defaults to a plain user when empty.
    #[serde(default)]
    pub roles: Vec<Role>,
}

// Token request structure
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

// Token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
