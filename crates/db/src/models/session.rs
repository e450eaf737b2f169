//! Session model and DTOs.
//!
//! The session row is the source of truth for revocation: a
//! signature-valid token whose row is gone or expired is rejected. Both
//! last-issued tokens are stored so a presented refresh token can be
//! matched textually against the single active value (rotation replay
//! defense).

use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// `id` is a 64-char lowercase hex string (32 random bytes) minted at
/// login and embedded in both tokens as the `sid` claim.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: DbId,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub id: String,
    pub user_id: DbId,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Session joined with its owning user, used by the refresh path to mint
/// a fresh claim set without a second lookup.
#[derive(Debug, Clone, FromRow)]
pub struct SessionWithUser {
    pub id: String,
    pub user_id: DbId,
    pub expires_at: Timestamp,
    pub email: String,
    pub role: String,
}
