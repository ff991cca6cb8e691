//! Rate Limiting Tests

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::Value;

use crate::common::{TestApp, TestUser};

fn limited_app(max_requests: u32) -> TestApp {
    TestApp::with_settings(|settings| {
        settings.rate_limit.max_requests = max_requests;
        settings.rate_limit.window_seconds = 900;
    })
}

fn forwarded_for(ip: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-forwarded-for"),
        HeaderValue::from_static(ip),
    )
}

#[tokio::test]
async fn test_headers_count_down() {
    let app = limited_app(5);

    let response = app.server.get("/api/menu").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-ratelimit-limit"), "5");
    assert_eq!(response.header("x-ratelimit-remaining"), "4");
}

#[tokio::test]
async fn test_over_limit_is_429_with_retry_after() {
    let app = limited_app(2);
    let (name, value) = forwarded_for("203.0.113.7");

    for _ in 0..2 {
        app.server
            .get("/api/business")
            .add_header(name.clone(), value.clone())
            .await
            .assert_status_ok();
    }

    let response = app
        .server
        .get("/api/business")
        .add_header(name.clone(), value.clone())
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    let body: Value = response.json();
    assert_eq!(body["code"], 10006);

    // A different client is unaffected
    let (name, value) = forwarded_for("198.51.100.1");
    app.server
        .get("/api/business")
        .add_header(name, value)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_users_limited_separately() {
    let app = limited_app(1);
    let alice = TestUser::resident();
    let bob = TestUser::resident();

    for user in [&alice, &bob] {
        app.server
            .get("/api/me")
            .authorization_bearer(&user.token)
            .await
            .assert_status_ok();
    }

    app.server
        .get("/api/me")
        .authorization_bearer(&alice.token)
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_health_probes_not_limited() {
    let app = limited_app(1);

    for _ in 0..3 {
        app.server.get("/api/health/live").await.assert_status_ok();
    }
}

#[tokio::test]
async fn test_rejected_tokens_are_limited_per_address() {
    let app = limited_app(2);
    let (name, value) = forwarded_for("203.0.113.50");

    let mut statuses = Vec::new();
    for _ in 0..10 {
        let response = app
            .server
            .get("/api/orders")
            .authorization_bearer("garbage")
            .add_header(name.clone(), value.clone())
            .await;
        statuses.push(response.status_code());
    }

    assert_eq!(&statuses[..2], &[StatusCode::UNAUTHORIZED; 2]);
    assert!(statuses[2..]
        .iter()
        .all(|status| *status == StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn test_accepted_tokens_do_not_count_against_address() {
    let app = limited_app(2);
    let (name, value) = forwarded_for("203.0.113.51");

    for _ in 0..4 {
        let user = TestUser::resident();
        app.server
            .get("/api/me")
            .authorization_bearer(&user.token)
            .add_header(name.clone(), value.clone())
            .await
            .assert_status_ok();
    }
}
