//! Authentication API Tests

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::Value;

use crate::common::{expired_token, TestApp, TestUser};

async fn unauthorized_message(app: &TestApp, authorization: Option<&'static str>) -> String {
    let mut request = app.server.get("/api/me");
    if let Some(value) = authorization {
        request = request.add_header(header::AUTHORIZATION, HeaderValue::from_static(value));
    }
    let response = request.await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["code"], 10003);
    body["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_missing_header() {
    let app = TestApp::new();
    assert_eq!(
        unauthorized_message(&app, None).await,
        "Missing authorization header"
    );
}

#[tokio::test]
async fn test_non_bearer_scheme() {
    let app = TestApp::new();
    assert_eq!(
        unauthorized_message(&app, Some("Basic dXNlcjpwYXNz")).await,
        "Invalid authorization header format"
    );
}

#[tokio::test]
async fn test_garbage_token() {
    let app = TestApp::new();
    assert_eq!(
        unauthorized_message(&app, Some("Bearer not.a.jwt")).await,
        "Invalid or expired token"
    );
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(expired_token())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_me_returns_verified_user() {
    let app = TestApp::new();
    let user = TestUser::resident();

    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&user.token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["role"], "authenticated");
    assert_eq!(body["is_staff"], false);
}

#[tokio::test]
async fn test_staff_flag() {
    let app = TestApp::new();
    let staff = TestUser::staff();

    let body: Value = app
        .server
        .get("/api/me")
        .authorization_bearer(&staff.token)
        .await
        .json();

    assert_eq!(body["is_staff"], true);
}
