//! # Tollgate Config
//!
//! Configuration loaded once at startup from environment variables.
//!
//! - [`jwt`]: token signing key configuration

pub mod jwt;

// Re-export commonly used types at crate root
pub use jwt::JwtConfig;
