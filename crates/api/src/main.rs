use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::auth::password::hash_password;
use folio_api::config::ServerConfig;
use folio_api::mail::Mailer;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::roles::ROLE_ADMIN;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use folio_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = folio_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    folio_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Optional admin bootstrap ---
    bootstrap_admin(&pool).await;

    // --- Mailer ---
    let mailer = config.mail.clone().map(|mail_config| {
        tracing::info!(host = %mail_config.smtp_host, "SMTP mailer configured");
        Arc::new(Mailer::new(mail_config))
    });
    if mailer.is_none() {
        tracing::info!("SMTP not configured, outbound email disabled");
    }
    if config.ai.is_none() {
        tracing::info!("OpenRouter not configured, AI reply suggestions disabled");
    }

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
        http: reqwest::Client::new(),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Create the initial admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD`
/// when both are set and no user with that email exists yet. Lets a fresh
/// deployment come up with a working login without manual SQL.
async fn bootstrap_admin(pool: &DbPool) {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        return;
    };

    let existing = UserRepo::find_by_email(pool, &email)
        .await
        .expect("Admin bootstrap lookup failed");
    if existing.is_some() {
        tracing::debug!("Admin account already exists, skipping bootstrap");
        return;
    }

    let password_hash = hash_password(&password).expect("Failed to hash admin password");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email,
            name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".into()),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await
    .expect("Failed to create admin account");

    tracing::info!(user_id = user.id, "Admin account bootstrapped");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
