//! Route definitions for the site-settings singleton.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Public route mounted at `/settings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get))
}

/// Admin route mounted at `/admin/settings`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", patch(settings::update))
}
