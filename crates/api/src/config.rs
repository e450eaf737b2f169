use crate::ai::AiConfig;
use crate::auth::jwt::JwtConfig;
use crate::mail::MailConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secrets have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether session cookies carry the `Secure` flag. On whenever
    /// `APP_ENV=production`; local development stays off so plain-HTTP
    /// testing works.
    pub secure_cookies: bool,
    /// JWT token configuration (secrets, expiry durations).
    pub jwt: JwtConfig,
    /// Secret salt for the one-way contact-IP hash. Unset disables the
    /// hash entirely (the default).
    pub ip_hash_salt: Option<String>,
    /// SMTP settings; unset disables outbound email.
    pub mail: Option<MailConfig>,
    /// OpenRouter settings; unset disables AI reply suggestions.
    pub ai: Option<AiConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    /// | `CONTACT_IP_HASH_SALT` | unset (hash disabled)      |
    ///
    /// JWT, mail, and AI sub-configs are loaded by their own modules.
    ///
    /// # Panics
    ///
    /// Panics if either JWT secret is unset (see [`JwtConfig::from_env`])
    /// or a numeric variable fails to parse. Misconfiguration should stop
    /// the process at startup, not surface later.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let secure_cookies =
            std::env::var("APP_ENV").is_ok_and(|env| env.eq_ignore_ascii_case("production"));

        let ip_hash_salt = std::env::var("CONTACT_IP_HASH_SALT")
            .ok()
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            secure_cookies,
            jwt: JwtConfig::from_env(),
            ip_hash_salt,
            mail: MailConfig::from_env(),
            ai: AiConfig::from_env(),
        }
    }
}
