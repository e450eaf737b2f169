//! Admin handlers for the contact-message inbox.
//!
//! Every handler here requires an admin session via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::paging::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use folio_core::types::DbId;
use folio_db::models::contact_message::{
    ContactMessage, ContactMessageListParams, UpdateContactMessageFlags,
};
use folio_db::repositories::ContactMessageRepo;
use serde::Serialize;

use crate::ai::suggest_reply;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `POST /contact-messages/{id}/suggest-reply`.
#[derive(Debug, Serialize)]
pub struct SuggestedReply {
    pub reply: String,
    pub model: String,
}

/// Request body for `POST /contact-messages/{id}/reply`.
#[derive(Debug, serde::Deserialize)]
pub struct SendReplyRequest {
    pub subject: String,
    pub body: String,
}

/// GET /api/contact-messages
///
/// List messages newest first. `?spam=true|false` filters on the verdict;
/// omitting it returns everything.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ContactMessageListParams>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let messages = ContactMessageRepo::list_filtered(&state.pool, params.spam, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/contact-messages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ContactMessage",
            id: id.to_string(),
        })?;
    Ok(Json(DataResponse { data: message }))
}

/// PATCH /api/contact-messages/{id}
///
/// Update the read / spam flags. Marking a message spam also marks it read.
pub async fn update_flags(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactMessageFlags>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let message = ContactMessageRepo::update_flags(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ContactMessage",
            id: id.to_string(),
        })?;
    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/contact-messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactMessageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id: id.to_string(),
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/contact-messages/{id}/suggest-reply
///
/// Draft a reply with the configured OpenRouter model and store it on the
/// message. Returns 503 when AI suggestions are not configured.
pub async fn suggest_ai_reply(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SuggestedReply>>> {
    let Some(ai) = state.config.ai.as_ref() else {
        return Err(AppError::ServiceUnavailable(
            "AI reply suggestions are not configured".into(),
        ));
    };

    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ContactMessage",
            id: id.to_string(),
        })?;

    let suggestion = suggest_reply(
        &state.http,
        ai,
        &message.name,
        message.subject.as_deref().unwrap_or(""),
        &message.message,
    )
    .await
    .map_err(|e| AppError::InternalError(format!("AI suggestion failed: {e}")))?;

    ContactMessageRepo::record_ai_suggestion(&state.pool, id, &suggestion.reply, &suggestion.model)
        .await?;

    Ok(Json(DataResponse {
        data: SuggestedReply {
            reply: suggestion.reply,
            model: suggestion.model,
        },
    }))
}

/// POST /api/contact-messages/{id}/reply
///
/// Email a reply to the original sender and record it on the message.
/// Returns 503 when SMTP is not configured.
pub async fn send_reply(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SendReplyRequest>,
) -> AppResult<StatusCode> {
    if input.subject.trim().is_empty() || input.body.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Reply subject and body must not be empty".into(),
        )));
    }

    let Some(mailer) = state.mailer.as_ref() else {
        return Err(AppError::ServiceUnavailable(
            "Outbound email is not configured".into(),
        ));
    };

    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ContactMessage",
            id: id.to_string(),
        })?;

    mailer
        .send_reply(&message.email, &input.subject, &input.body)
        .await
        .map_err(|e| AppError::InternalError(format!("Reply delivery failed: {e}")))?;

    ContactMessageRepo::record_reply(&state.pool, id, &input.subject, &input.body).await?;
    tracing::info!(message_id = id, "Reply sent and recorded");

    Ok(StatusCode::NO_CONTENT)
}
