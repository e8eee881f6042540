//! Token issuance, decoding, and validation.
//!
//! The codec signs and verifies with the process-wide HMAC key from
//! [`JwtConfig`]. Decoding deliberately does not treat expiry as a parse
//! failure; [`validate_token`] checks expiry separately so that the two
//! outcomes stay distinguishable.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use tollgate_config::JwtConfig;
use tollgate_core::AppError;

use crate::claims::Claims;

/// Fixed access token lifetime: 10 hours.
pub const TOKEN_TTL_SECS: usize = 60 * 60 * 10;

/// Issues a signed access token for `subject` carrying the given authorities.
///
/// The roles are joined with `,` into a single string claim. Expiry is always
/// issued-at plus [`TOKEN_TTL_SECS`].
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(
    subject: &str,
    roles: &[String],
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.join(","),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    tracing::info!(subject, "issuing access token");

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&jwt_config.secret),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Parses a token and verifies its signature, returning the embedded claims.
///
/// Expiry is not checked here; an expired but well-signed token still decodes.
/// Any structural or signature failure yields an unauthorized error and no
/// partial claims.
pub fn decode_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["sub"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&jwt_config.secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid token"))
}

/// Extracts the subject (username) from a token, verifying the signature.
pub fn extract_subject(token: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    decode_token(token, jwt_config).map(|claims| claims.sub)
}

/// Extracts the authority strings from a token, verifying the signature.
pub fn extract_roles(token: &str, jwt_config: &JwtConfig) -> Result<Vec<String>, AppError> {
    decode_token(token, jwt_config).map(|claims| claims.authorities())
}

/// Checks whether `token` is valid for `expected_subject` right now.
///
/// True only when the token decodes, its subject matches exactly, and it has
/// not expired. `now >= exp` counts as expired. Decode failures are reported
/// as plain `false`; this function never errors.
pub fn validate_token(token: &str, expected_subject: &str, jwt_config: &JwtConfig) -> bool {
    match decode_token(token, jwt_config) {
        Ok(claims) => claims.sub == expected_subject && !is_expired(&claims),
        Err(_) => false,
    }
}

fn is_expired(claims: &Claims) -> bool {
    Utc::now().timestamp() as usize >= claims.exp
}
