//! Repository for the singleton `site_settings` row.

use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

/// The fixed primary key of the singleton row.
const SETTINGS_ID: &str = "default";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, site_name, site_description, contact_email, github_url, linkedin_url, updated_at";

/// Provides read/update access to the site settings singleton.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Fetch the settings row. The initial migration seeds it, so a miss
    /// means the database was not migrated.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_optional(pool)
            .await
    }

    /// Update settings. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE site_settings SET
                site_name = COALESCE($2, site_name),
                site_description = COALESCE($3, site_description),
                contact_email = COALESCE($4, contact_email),
                github_url = COALESCE($5, github_url),
                linkedin_url = COALESCE($6, linkedin_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .bind(&input.site_name)
            .bind(&input.site_description)
            .bind(&input.contact_email)
            .bind(&input.github_url)
            .bind(&input.linkedin_url)
            .fetch_optional(pool)
            .await
    }
}
