//! Portfolio project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    /// URL-safe unique identifier used in public routes.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a project. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}
