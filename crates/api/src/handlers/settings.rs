//! Handlers for the site settings singleton.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::site_settings::{SiteSettings, UpdateSiteSettings};
use folio_db::repositories::SiteSettingsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/settings
///
/// Public read of the site settings row. The row is seeded by migration,
/// so a miss means the database was provisioned outside the migrations.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<DataResponse<SiteSettings>>> {
    let settings = SiteSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::InternalError("Site settings row is missing".into()))?;
    Ok(Json(DataResponse { data: settings }))
}

/// PATCH /api/admin/settings
///
/// Partial update; omitted fields keep their current values.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<Json<DataResponse<SiteSettings>>> {
    if input
        .contact_email
        .as_deref()
        .is_some_and(|email| !email.contains('@'))
    {
        return Err(AppError::Core(CoreError::Validation(
            "contact_email must be a valid email address".into(),
        )));
    }

    let settings = SiteSettingsRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| AppError::InternalError("Site settings row is missing".into()))?;
    Ok(Json(DataResponse { data: settings }))
}
