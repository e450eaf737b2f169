//! HTTP-level tests for the cookie-based auth surface.
//!
//! These cover the paths that resolve before any database access: missing
//! or cryptographically invalid cookies, and logout's unconditional cookie
//! clearing.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{assert_error_body, get, post_empty};
use tower::ServiceExt;

fn set_cookies(response: &axum::http::Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

async fn post_with_cookie(
    app: axum::Router,
    path: &str,
    cookie: &str,
) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

/// No refresh cookie: 401, and nothing is mutated (no Set-Cookie).
#[tokio::test]
async fn refresh_without_cookie_returns_401() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/auth/refresh").await;

    assert!(set_cookies(&response).is_empty());
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

/// A refresh cookie that fails signature verification clears both cookies
/// and returns 401.
#[tokio::test]
async fn refresh_with_garbage_cookie_clears_cookies() {
    let app = common::build_test_app();
    let response = post_with_cookie(app, "/api/auth/refresh", "refresh_token=not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("access_token=;")));
    assert!(cookies.iter().any(|c| c.starts_with("refresh_token=;")));
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

// ---------------------------------------------------------------------------
// Session endpoint
// ---------------------------------------------------------------------------

/// No cookies at all: 401 with no cookie churn.
#[tokio::test]
async fn session_endpoint_without_cookies_returns_401() {
    let app = common::build_test_app();
    let response = get(app, "/api/auth/session").await;

    assert!(set_cookies(&response).is_empty());
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

/// An unverifiable access token with no refresh token falls through the
/// implicit-refresh path and comes back 401 without touching the cookies.
#[tokio::test]
async fn session_endpoint_with_garbage_access_token_returns_401() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/session")
        .header(header::COOKIE, "access_token=bogus.token.value")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(set_cookies(&response).is_empty());
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout always succeeds with 204 and clears both cookies, session or not.
#[tokio::test]
async fn logout_without_session_returns_204_and_clears_cookies() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/auth/logout").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("access_token=;")));
    assert!(cookies.iter().any(|c| c.starts_with("refresh_token=;")));
    for cookie in &cookies {
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
    }
}

// ---------------------------------------------------------------------------
// Authenticated routes without a session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_without_cookie_returns_401() {
    let app = common::build_test_app();
    let response = get(app, "/api/auth/profile").await;
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn profile_with_garbage_access_token_returns_401() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/profile")
        .header(header::COOKIE, "access_token=bogus.token.value")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn change_password_without_cookie_returns_401() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/auth/change-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Admin routes without a session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_inbox_without_cookie_returns_401() {
    let app = common::build_test_app();
    let response = get(app, "/api/contact-messages").await;
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn admin_projects_without_cookie_returns_401() {
    let app = common::build_test_app();
    let response = get(app, "/api/admin/projects").await;
    assert_error_body(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
