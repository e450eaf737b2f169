pub mod auth;
pub mod contact;
pub mod health;
pub mod messages;
pub mod projects;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                            login (public)
/// /auth/session                          current session, implicit refresh (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (public)
/// /auth/profile                          profile (requires auth)
/// /auth/change-password                  change password (requires auth)
///
/// /contact                               submit contact form (public)
///
/// /contact-messages                      list (admin only)
/// /contact-messages/{id}                 get, update flags, delete
/// /contact-messages/{id}/suggest-reply   AI reply draft (POST)
/// /contact-messages/{id}/reply           send reply email (POST)
///
/// /projects                              published projects (public)
/// /projects/{slug}                       published project detail (public)
///
/// /settings                              site settings (public)
///
/// /admin/projects                        list, create (admin only)
/// /admin/projects/{id}                   update, delete
/// /admin/settings                        update settings (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout, profile).
        .nest("/auth", auth::router())
        // Public contact form.
        .nest("/contact", contact::router())
        // Admin inbox.
        .nest("/contact-messages", messages::router())
        // Public portfolio content.
        .nest("/projects", projects::router())
        .nest("/settings", settings::router())
        // Admin content management.
        .nest("/admin/projects", projects::admin_router())
        .nest("/admin/settings", settings::admin_router())
}
