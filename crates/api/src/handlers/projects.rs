//! Handlers for the `/projects` resource.
//!
//! Public visitors see published projects only; the admin CRUD surface
//! operates on everything.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/projects
///
/// Public listing: published projects, featured first.
pub async fn list_published(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/projects/{slug}
///
/// Public detail view by slug. Unpublished projects are indistinguishable
/// from missing ones.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            id: slug,
        })?;
    Ok(Json(DataResponse { data: project }))
}

/// GET /api/admin/projects
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/admin/projects
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    if input.slug.trim().is_empty() || input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project slug and title must not be empty".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PATCH /api/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        })?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
