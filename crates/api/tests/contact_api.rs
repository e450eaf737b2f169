//! HTTP-level tests for the public contact form's input validation.

mod common;

use axum::http::StatusCode;
use common::{assert_error_body, post_json};

#[tokio::test]
async fn contact_with_invalid_email_returns_400() {
    let app = common::build_test_app();
    let body = serde_json::json!({
        "name": "Ada",
        "email": "not-an-email",
        "message": "I would like to discuss a project with you.",
    });
    let response = post_json(app, "/api/contact", body).await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn contact_with_empty_name_returns_400() {
    let app = common::build_test_app();
    let body = serde_json::json!({
        "name": "",
        "email": "ada@example.com",
        "message": "I would like to discuss a project with you.",
    });
    let response = post_json(app, "/api/contact", body).await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn contact_with_missing_fields_is_rejected() {
    let app = common::build_test_app();
    let body = serde_json::json!({ "name": "Ada" });
    let response = post_json(app, "/api/contact", body).await;
    assert!(
        response.status().is_client_error(),
        "missing required fields must be rejected, got {}",
        response.status()
    );
}

#[tokio::test]
async fn contact_with_oversized_message_returns_400() {
    let app = common::build_test_app();
    let body = serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "x".repeat(5001),
    });
    let response = post_json(app, "/api/contact", body).await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}
