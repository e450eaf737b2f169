//! Database-backed tests for the session lifecycle: create/read round-trip,
//! refresh rotation and replay rejection, destroy, and expired-row handling.
//!
//! These exercise the session manager directly against a provisioned
//! database rather than over HTTP, so each property is checked without the
//! login endpoint in the way.

mod common;

use axum_extra::extract::cookie::{Cookie, CookieJar};
use common::test_config;
use folio_api::auth::password::hash_password;
use folio_api::auth::session::{
    create_session, destroy_session, read_or_refresh_session, read_session, refresh_session,
    NewSession, SessionParams, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE,
};
use folio_core::roles::ROLE_ADMIN;
use folio_db::models::user::{CreateUser, User};
use folio_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database.
async fn create_test_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        name: "Test Admin".to_string(),
        password_hash: hash_password("test_password_123!").expect("hashing should succeed"),
        role: ROLE_ADMIN.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Open a session for the user and return the cookie jar plus the token set.
async fn open_session(pool: &PgPool, user: &User) -> (CookieJar, NewSession) {
    create_session(
        pool,
        &test_config(),
        CookieJar::new(),
        SessionParams {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            user_agent: Some("integration-test".to_string()),
            ip_address: None,
        },
    )
    .await
    .expect("session creation should succeed")
}

// ---------------------------------------------------------------------------
// Lifecycle properties
// ---------------------------------------------------------------------------

/// A freshly created session reads back the same claims it was minted with.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_read_round_trips_claims(pool: PgPool) {
    let config = test_config();
    let user = create_test_user(&pool, "owner@test.com").await;
    let (jar, session) = open_session(&pool, &user).await;

    let claims = read_session(&pool, &config, &jar)
        .await
        .expect("read should not error")
        .expect("session should be readable");

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, user.role);
    assert_eq!(claims.sid, session.session_id);
}

/// Refresh rotates both tokens; replaying the superseded refresh token is
/// rejected and tears the session down.
#[sqlx::test(migrations = "../db/migrations")]
async fn replayed_refresh_token_is_rejected(pool: PgPool) {
    let config = test_config();
    let user = create_test_user(&pool, "owner@test.com").await;
    let (jar, original) = open_session(&pool, &user).await;

    let (rotated_jar, claims) = refresh_session(&pool, &config, jar)
        .await
        .expect("refresh should not error");
    let claims = claims.expect("first refresh should succeed");
    assert_eq!(claims.sid, original.session_id);

    let rotated_refresh = rotated_jar
        .get(REFRESH_TOKEN_COOKIE)
        .expect("refresh cookie should be set")
        .value()
        .to_string();
    assert_ne!(rotated_refresh, original.refresh_token, "token must rotate");

    // Replay the pre-rotation pair. The exact-match lookup misses, so the
    // session is destroyed and the caller is unauthenticated.
    let replay_jar = CookieJar::new()
        .add(Cookie::new(ACCESS_TOKEN_COOKIE, original.access_token))
        .add(Cookie::new(REFRESH_TOKEN_COOKIE, original.refresh_token));
    let (_, replayed) = refresh_session(&pool, &config, replay_jar)
        .await
        .expect("replay should not error");
    assert!(replayed.is_none(), "replayed refresh token must be rejected");

    let row = SessionRepo::find_by_id(&pool, &original.session_id)
        .await
        .expect("lookup should not error");
    assert!(row.is_none(), "replay must destroy the session row");
}

/// After destroy, signature-valid tokens no longer authenticate.
#[sqlx::test(migrations = "../db/migrations")]
async fn destroyed_session_is_unreadable(pool: PgPool) {
    let config = test_config();
    let user = create_test_user(&pool, "owner@test.com").await;
    let (jar, session) = open_session(&pool, &user).await;

    let cleared = destroy_session(&pool, &config, jar.clone()).await;
    assert_eq!(
        cleared.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string()),
        Some(String::new())
    );

    let row = SessionRepo::find_by_id(&pool, &session.session_id)
        .await
        .expect("lookup should not error");
    assert!(row.is_none());

    // The original (still signature-valid) cookies are now worthless.
    let claims = read_session(&pool, &config, &jar)
        .await
        .expect("read should not error");
    assert!(claims.is_none());
}

/// The implicit-refresh read path recovers a session whose access token no
/// longer verifies, as long as the refresh token is still good.
#[sqlx::test(migrations = "../db/migrations")]
async fn read_or_refresh_recovers_from_lapsed_access_token(pool: PgPool) {
    let config = test_config();
    let user = create_test_user(&pool, "owner@test.com").await;
    let (jar, session) = open_session(&pool, &user).await;

    // Stand in for an expired access token: same cookie slot, unverifiable.
    let lapsed_jar = jar.add(Cookie::new(ACCESS_TOKEN_COOKIE, "bogus.token.value"));

    let (rotated_jar, claims) = read_or_refresh_session(&pool, &config, lapsed_jar)
        .await
        .expect("read should not error");
    let claims = claims.expect("refresh fallback should recover the session");
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.sid, session.session_id);

    let new_access = rotated_jar
        .get(ACCESS_TOKEN_COOKIE)
        .expect("access cookie should be rewritten")
        .value()
        .to_string();
    assert_ne!(new_access, "bogus.token.value");
}

/// A session row past its expiry behaves exactly like a missing row, for
/// both the read and refresh paths.
#[sqlx::test(migrations = "../db/migrations")]
async fn expired_row_is_treated_as_missing(pool: PgPool) {
    let config = test_config();
    let user = create_test_user(&pool, "owner@test.com").await;
    let (jar, session) = open_session(&pool, &user).await;

    sqlx::query("UPDATE sessions SET expires_at = NOW() - INTERVAL '1 hour' WHERE id = $1")
        .bind(&session.session_id)
        .execute(&pool)
        .await
        .expect("expiry backdate should succeed");

    let claims = read_session(&pool, &config, &jar)
        .await
        .expect("read should not error");
    assert!(claims.is_none(), "expired row must not authenticate");

    let (_, refreshed) = refresh_session(&pool, &config, jar)
        .await
        .expect("refresh should not error");
    assert!(refreshed.is_none(), "expired row must not refresh");
}
