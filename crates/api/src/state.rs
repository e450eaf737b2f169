use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mail::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` and cheaply cloneable (inner data is behind
/// `Arc` or is already `Clone`). There are no module-level singletons: every
/// client the handlers use lives here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound SMTP mailer, present when SMTP is configured.
    pub mailer: Option<Arc<Mailer>>,
    /// Shared HTTP client for the AI suggestion integration.
    pub http: reqwest::Client,
}
