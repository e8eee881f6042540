//! Request-processing middleware.
//!
//! - [`auth`]: per-request authentication filter and the `AuthUser` extractor
//! - [`role`]: role-based route guards layered after the filter
//!
//! # Authentication flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::authenticate`] resolves the token to an [`auth::AuthContext`]
//!    request extension, or leaves the request anonymous
//! 3. Role guards ([`role::require_user`], [`role::require_admin`]) decide
//!    whether an anonymous or under-privileged request may proceed
//! 4. Handlers read the identity through the [`auth::AuthUser`] extractor

pub mod auth;
pub mod role;
