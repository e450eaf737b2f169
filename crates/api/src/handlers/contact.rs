//! Handler for the public contact form submission.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use folio_core::client_ip::anonymize_ip;
use folio_core::error::CoreError;
use folio_core::hashing::hmac_sha256_hex;
use folio_core::spam::classify;
use folio_core::types::DbId;
use folio_db::models::contact_message::CreateContactMessage;
use folio_db::repositories::ContactMessageRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::client_meta;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /contact`.
///
/// `website` is the honeypot field. It is rendered invisibly in the form,
/// so any non-empty value marks the submission as bot traffic.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(max = 200, message = "subject must be at most 200 characters"))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "message must be 1-5000 characters"))]
    pub message: String,
    pub website: Option<String>,
}

/// Response payload: the stored message's id.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub id: DbId,
}

/// POST /api/contact
///
/// Accept a contact form submission. The message is always stored; the
/// spam verdict only controls flagging and whether a notification email
/// goes out. Returns 201 with the new message id either way, so bots get
/// no signal that they were flagged.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<ContactSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<SubmissionReceipt>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let verdict = classify(
        input.website.as_deref(),
        input.subject.as_deref(),
        &input.message,
    );

    let meta = client_meta(&headers);
    let ip_anonymized = meta.ip.map(|ip| anonymize_ip(&ip));
    let ip_hash = match (&state.config.ip_hash_salt, meta.ip) {
        (Some(salt), Some(ip)) => Some(hmac_sha256_hex(salt, &ip.to_string())),
        _ => None,
    };

    let created = ContactMessageRepo::create(
        &state.pool,
        &CreateContactMessage {
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            is_spam: verdict.is_spam,
            spam_score: verdict.score,
            spam_reasons: verdict.reasons.iter().map(|r| r.to_string()).collect(),
            ip_anonymized,
            ip_hash,
            country: meta.country,
            region: meta.region,
            city: meta.city,
            user_agent: meta.user_agent,
        },
    )
    .await?;

    tracing::info!(
        message_id = created.id,
        is_spam = created.is_spam,
        spam_score = created.spam_score,
        "Contact message stored"
    );

    // Notification delivery must not block or fail the submission.
    if !created.is_spam {
        if let Some(mailer) = state.mailer.clone() {
            let message = created.clone();
            tokio::spawn(async move {
                if let Err(err) = mailer.send_contact_notification(&message).await {
                    tracing::warn!(error = %err, message_id = message.id, "Contact notification failed");
                }
            });
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmissionReceipt { id: created.id },
        }),
    ))
}
