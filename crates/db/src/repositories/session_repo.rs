//! Repository for the `sessions` table.
//!
//! Sessions are keyed by the random hex id embedded in both tokens. The
//! refresh path looks up by `(id, refresh_token)` exact match, which is
//! what invalidates a rotated-out refresh token: after rotation the stored
//! value no longer matches the replayed one.

use folio_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session, SessionWithUser};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, access_token, refresh_token, expires_at, \
                        user_agent, ip_address, created_at, updated_at";

/// Provides CRUD operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (id, user_id, access_token, refresh_token, expires_at, user_agent, ip_address)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.id)
            .bind(input.user_id)
            .bind(&input.access_token)
            .bind(&input.refresh_token)
            .bind(input.expires_at)
            .bind(&input.user_agent)
            .bind(&input.ip_address)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its id. Expiry is checked by the caller so an
    /// expired row and a missing row take the same code path.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by `(id, refresh_token)` exact match, joined with the
    /// owning user. A rotated-out or foreign refresh token misses here.
    pub async fn find_by_id_and_refresh_token(
        pool: &PgPool,
        id: &str,
        refresh_token: &str,
    ) -> Result<Option<SessionWithUser>, sqlx::Error> {
        sqlx::query_as::<_, SessionWithUser>(
            "SELECT s.id, s.user_id, s.expires_at, u.email, u.role
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.id = $1 AND s.refresh_token = $2",
        )
        .bind(id)
        .bind(refresh_token)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite both tokens and extend the expiry (token rotation).
    /// Returns `true` if the row was updated.
    pub async fn update_tokens(
        pool: &PgPool,
        id: &str,
        access_token: &str,
        refresh_token: &str,
        expires_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions
             SET access_token = $2, refresh_token = $3, expires_at = $4, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(access_token)
        .bind(refresh_token)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a session by id. Tolerant of already-missing rows.
    pub async fn delete_by_id(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every session owned by a user ("log out everywhere").
    pub async fn delete_by_user_id(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
