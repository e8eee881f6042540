//! # Tollgate
//!
//! A stateless authentication service built with Axum. Callers exchange
//! credentials for an HMAC-SHA256-signed bearer token; a per-request filter
//! resolves tokens back into identities, and role guards enforce access on
//! protected routes.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── tollgate-core/    # AppError + password hashing
//! ├── tollgate-config/  # signing key configuration
//! └── tollgate-auth/    # token claims, codec, validation
//! src/
//! ├── middleware/       # authentication filter and role guards
//! ├── modules/
//! │   ├── auth/         # register / token / guarded demo pages
//! │   └── users/        # user model, identity mapping, in-memory store
//! ├── router.rs         # route wiring and middleware layering
//! └── state.rs          # shared application state
//! ```
//!
//! ## Request flow
//!
//! 1. `logging_middleware` tags the request and times it
//! 2. `middleware::auth::authenticate` resolves a bearer token into an
//!    `AuthContext` extension, or passes the request through anonymously
//! 3. Role guards (`require_user`, `require_admin`) accept or reject
//! 4. Handlers read the identity via the `AuthUser` extractor
//!
//! ## Environment
//!
//! ```bash
//! JWT_SECRET=<base64-encoded HMAC key>   # required, startup fails without it
//! RUST_LOG=tollgate=debug                # optional
//! ```
//!
//! Sessions are fully stateless: all authentication state travels inside the
//! token, and tokens expire a fixed ten hours after issuance.

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use tollgate_auth;
pub use tollgate_config;
pub use tollgate_core;
