//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthSession`] and rejects requests whose role does
//! not meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::roles::is_admin_role;

use super::auth::AuthSession;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `ADMIN` or `SUPER_ADMIN` role. Rejects with 403 Forbidden
/// otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(session): RequireAdmin) -> AppResult<Json<()>> {
///     // session is guaranteed to belong to an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = AuthSession::from_request_parts(parts, state).await?;
        if !is_admin_role(&session.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(session))
    }
}
