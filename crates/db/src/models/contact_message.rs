//! Contact message entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_messages` table.
///
/// Trust metadata (`is_spam`, `spam_score`, `spam_reasons`, the IP and geo
/// fields) is derived once by the classifier at submission time and never
/// touched by it again; only admin actions and the AI-suggestion step
/// mutate the row afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,

    pub is_spam: bool,
    pub spam_score: i32,
    /// Triggered signal tags, in evaluation order.
    pub spam_reasons: Vec<String>,

    /// Anonymized address (/24 for IPv4, /48 for IPv6); never the original.
    pub ip_anonymized: Option<String>,
    /// Salted HMAC-SHA256 of the original address, when a salt is configured.
    pub ip_hash: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub user_agent: Option<String>,

    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub reply_subject: Option<String>,
    pub reply_body: Option<String>,
    pub replied_at: Option<Timestamp>,
    pub ai_suggested_reply: Option<String>,
    pub ai_model: Option<String>,
    pub ai_suggested_at: Option<Timestamp>,

    pub created_at: Timestamp,
}

/// DTO for creating a contact message (submission plus derived metadata).
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_spam: bool,
    pub spam_score: i32,
    pub spam_reasons: Vec<String>,
    pub ip_anonymized: Option<String>,
    pub ip_hash: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub user_agent: Option<String>,
}

/// DTO for admin flag updates (mark read / mark spam).
#[derive(Debug, Deserialize)]
pub struct UpdateContactMessageFlags {
    pub is_read: Option<bool>,
    pub is_spam: Option<bool>,
}

/// Query parameters for listing contact messages.
#[derive(Debug, Deserialize)]
pub struct ContactMessageListParams {
    /// Filter on the spam verdict; absent means all messages.
    pub spam: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
