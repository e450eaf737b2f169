//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthSession`] -- Extracts the authenticated session from the
//!   access-token cookie.
//! - [`rbac::RequireAdmin`] -- Requires an admin role.

pub mod auth;
pub mod rbac;
