//! Route definitions for the admin contact-message inbox.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/contact-messages` (admin only).
///
/// ```text
/// GET    /                     -> list (?spam=, ?limit=, ?offset=)
/// GET    /{id}                 -> get_by_id
/// PATCH  /{id}                 -> update_flags
/// DELETE /{id}                 -> delete
/// POST   /{id}/suggest-reply   -> suggest_ai_reply
/// POST   /{id}/reply           -> send_reply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(messages::list))
        .route(
            "/{id}",
            get(messages::get_by_id)
                .patch(messages::update_flags)
                .delete(messages::delete),
        )
        .route("/{id}/suggest-reply", post(messages::suggest_ai_reply))
        .route("/{id}/reply", post(messages::send_reply))
}
