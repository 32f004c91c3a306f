//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer
//!   token. Use `AuthUser` to require authentication, or `Option<AuthUser>`
//!   when the handler reports unauthenticated callers itself.

pub mod auth;
