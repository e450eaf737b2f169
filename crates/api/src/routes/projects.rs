//! Route definitions for the `/projects` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET /        -> list_published
/// GET /{slug}  -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_published))
        .route("/{slug}", get(projects::get_by_slug))
}

/// Admin routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /      -> list_all
/// POST   /      -> create
/// PATCH  /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_all).post(projects::create))
        .route(
            "/{id}",
            patch(projects::update).delete(projects::delete),
        )
}
