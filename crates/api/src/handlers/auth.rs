//! Handlers for the `/auth` resource (login, refresh, logout, profile,
//! password change).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::CookieJar;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::user::UserResponse;
use folio_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::{
    create_session, destroy_all_user_sessions, destroy_session, read_or_refresh_session,
    refresh_session, SessionParams,
};
use crate::error::{AppError, AppResult};
use crate::handlers::client_meta;
use crate::middleware::auth::AuthSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Session payload returned by refresh and the session endpoint.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub user_id: DbId,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. On success a new session row is
/// created and both token cookies are set; the body carries the public
/// user profile.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<DataResponse<UserResponse>>)> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let meta = client_meta(&headers);
    let (jar, _session) = create_session(
        &state.pool,
        &state.config,
        jar,
        SessionParams {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            user_agent: meta.user_agent,
            ip_address: meta.ip.map(|ip| ip.to_string()),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok((jar, Json(DataResponse { data: UserResponse::from(&user) })))
}

/// POST /api/auth/refresh
///
/// Exchange the refresh cookie for a rotated token pair. An invalid or
/// replayed refresh token clears both cookies and returns 401.
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    let (jar, claims) = refresh_session(&state.pool, &state.config, jar).await?;

    match claims {
        Some(claims) => Ok((
            jar,
            Json(DataResponse {
                data: SessionUser {
                    user_id: claims.sub,
                    email: claims.email,
                    role: claims.role,
                },
            }),
        )
            .into_response()),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            jar,
            Json(json!({
                "error": "Invalid or expired session",
                "code": "UNAUTHORIZED",
            })),
        )
            .into_response()),
    }
}

/// GET /api/auth/session
///
/// Session status for frontend boot: returns the current claims, silently
/// rotating the token pair first when the access token has lapsed but the
/// refresh token is still good. Unauthenticated clients get 401 without
/// any cookie churn.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    let (jar, claims) = read_or_refresh_session(&state.pool, &state.config, jar).await?;

    match claims {
        Some(claims) => Ok((
            jar,
            Json(DataResponse {
                data: SessionUser {
                    user_id: claims.sub,
                    email: claims.email,
                    role: claims.role,
                },
            }),
        )
            .into_response()),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            jar,
            Json(json!({
                "error": "Invalid or expired session",
                "code": "UNAUTHORIZED",
            })),
        )
            .into_response()),
    }
}

/// POST /api/auth/logout
///
/// Destroy the current session and clear both cookies. Always returns 204,
/// even when no session exists.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = destroy_session(&state.pool, &state.config, jar).await;
    (jar, StatusCode::NO_CONTENT)
}

/// GET /api/auth/profile
///
/// Return the authenticated user's public profile.
pub async fn profile(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "User",
            id: session.user_id.to_string(),
        })?;

    Ok(Json(DataResponse { data: UserResponse::from(&user) }))
}

/// POST /api/auth/change-password
///
/// Verify the current password, store a new Argon2id hash, and revoke every
/// session belonging to the user (including this one). Clears the cookies
/// so the client has to log in again.
pub async fn change_password(
    State(state): State<AppState>,
    session: AuthSession,
    jar: CookieJar,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<(CookieJar, StatusCode)> {
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "User",
            id: session.user_id.to_string(),
        })?;

    let valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password_hash(&state.pool, user.id, &new_hash).await?;

    let revoked = destroy_all_user_sessions(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, revoked, "Password changed, sessions revoked");

    let jar = destroy_session(&state.pool, &state.config, jar).await;
    Ok((jar, StatusCode::NO_CONTENT))
}
