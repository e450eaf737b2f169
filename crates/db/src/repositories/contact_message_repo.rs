//! Repository for the `contact_messages` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::{
    ContactMessage, CreateContactMessage, UpdateContactMessageFlags,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, subject, message, \
                        is_spam, spam_score, spam_reasons, \
                        ip_anonymized, ip_hash, country, region, city, user_agent, \
                        is_read, read_at, reply_subject, reply_body, replied_at, \
                        ai_suggested_reply, ai_model, ai_suggested_at, created_at";

/// Provides CRUD operations for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Insert a new message with its derived trust metadata.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages
                (name, email, subject, message, is_spam, spam_score, spam_reasons,
                 ip_anonymized, ip_hash, country, region, city, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.is_spam)
            .bind(input.spam_score)
            .bind(&input.spam_reasons)
            .bind(&input.ip_anonymized)
            .bind(&input.ip_hash)
            .bind(&input.country)
            .bind(&input.region)
            .bind(&input.city)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Find a message by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = $1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List messages, newest first, optionally filtered on the spam verdict.
    pub async fn list_filtered(
        pool: &PgPool,
        spam: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages
             WHERE ($1::boolean IS NULL OR is_spam = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(spam)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Apply admin flag updates. Marking spam also marks the message read;
    /// marking read stamps `read_at`, unmarking clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_flags(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactMessageFlags,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let mark_read = input.is_read.or(match input.is_spam {
            Some(true) => Some(true),
            _ => None,
        });
        let query = format!(
            "UPDATE contact_messages SET
                is_read = COALESCE($2, is_read),
                read_at = CASE
                    WHEN $2 IS TRUE THEN NOW()
                    WHEN $2 IS FALSE THEN NULL
                    ELSE read_at
                END,
                is_spam = COALESCE($3, is_spam)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(mark_read)
            .bind(input.is_spam)
            .fetch_optional(pool)
            .await
    }

    /// Record an outbound reply and mark the message read.
    pub async fn record_reply(
        pool: &PgPool,
        id: DbId,
        subject: &str,
        body: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contact_messages
             SET reply_subject = $2, reply_body = $3, replied_at = NOW(),
                 is_read = true, read_at = COALESCE(read_at, NOW())
             WHERE id = $1",
        )
        .bind(id)
        .bind(subject)
        .bind(body)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record an AI-suggested reply draft.
    pub async fn record_ai_suggestion(
        pool: &PgPool,
        id: DbId,
        reply: &str,
        model: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contact_messages
             SET ai_suggested_reply = $2, ai_model = $3, ai_suggested_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(reply)
        .bind(model)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a message. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
