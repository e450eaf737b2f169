//! Cookie-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::auth::session::read_session;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated session extracted from the access-token cookie.
///
/// Performs the read-only session check: it verifies the cookie's signature
/// and cross-checks the session row, but never rewrites cookies. Routes that
/// want an implicit refresh go through the dedicated refresh endpoint
/// instead.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(session: AuthSession) -> AppResult<Json<()>> {
///     tracing::info!(user_id = session.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's email address.
    pub email: String,
    /// The user's role name (e.g. `"ADMIN"`).
    pub role: String,
    /// The backing session row's id.
    pub session_id: String,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let claims = read_session(&state.pool, &state.config, &jar)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(AuthSession {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
            session_id: claims.sid,
        })
    }
}
