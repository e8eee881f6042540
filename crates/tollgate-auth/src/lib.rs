//! # Tollgate Auth
//!
//! Access token claims and the token codec/validator for the Tollgate
//! authentication service.
//!
//! This crate provides:
//!
//! - [`claims`]: the signed claim set carried by every access token
//! - [`jwt`]: token issuance, decoding, and validation
//!
//! Tokens are HMAC-SHA256-signed JWTs with a fixed ten hour lifetime. The
//! caller's authorities travel inside the token as a single comma-joined
//! `roles` claim, so a validated token is sufficient for authorization
//! decisions without extra lookups.
//!
//! # Example
//!
//! ```ignore
//! use tollgate_auth::{issue_token, validate_token};
//! use tollgate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token("alice", &["ROLE_USER".to_string()], &config)?;
//! assert!(validate_token(&token, "alice", &config));
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used items at crate root
pub use claims::Claims;
pub use jwt::{
    TOKEN_TTL_SECS, decode_token, extract_roles, extract_subject, issue_token, validate_token,
};
