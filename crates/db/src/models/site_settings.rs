//! Site settings model (single-row table keyed `'default'`).

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The singleton row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: String,
    pub site_name: String,
    pub site_description: String,
    /// Sender address for outbound replies; also shown on the contact page.
    pub contact_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub updated_at: Timestamp,
}

/// DTO for updating site settings. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateSiteSettings {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub contact_email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}
