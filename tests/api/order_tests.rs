//! Order API Tests

use axum::http::StatusCode;
use fake::{faker::lorem::en::Sentence, Fake};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{TestApp, TestUser};

fn margherita_order(quantity: u32) -> Value {
    json!({
        "business_id": "bella-napoli",
        "items": [
            { "menu_item_id": "napoli-margherita", "quantity": quantity },
            { "menu_item_id": "napoli-tiramisu", "quantity": 1 }
        ]
    })
}

async fn place(app: &TestApp, user: &TestUser, body: &Value) -> Value {
    let response = app
        .server
        .post("/api/orders")
        .authorization_bearer(&user.token)
        .json(body)
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_quote_prices_cart_without_saving() {
    let app = TestApp::new();
    let user = TestUser::resident();

    let response = app
        .server
        .post("/api/orders/quote")
        .authorization_bearer(&user.token)
        .json(&margherita_order(2))
        .await;

    response.assert_status_ok();
    let quote: Value = response.json();
    assert_eq!(quote["item_count"], 3);
    assert_eq!(quote["subtotal_cents"], 2 * 1200 + 650);
    assert_eq!(quote["delivery_fee_cents"], 300);
    assert_eq!(quote["total_cents"], 2 * 1200 + 650 + 300);
    assert_eq!(quote["lines"][0]["line_total_cents"], 2400);

    let orders: Value = app
        .server
        .get("/api/orders")
        .authorization_bearer(&user.token)
        .await
        .json();
    assert_eq!(orders["count"], 0);
}

#[tokio::test]
async fn test_place_order_then_read_back() {
    let app = TestApp::new();
    let user = TestUser::resident();
    let notes: String = Sentence(3..8).fake();

    let mut body = margherita_order(2);
    body["notes"] = json!(notes);
    let order = place(&app, &user, &body).await;

    assert_eq!(order["status"], "pending");
    assert_eq!(order["total_cents"], 3350);
    assert_eq!(order["notes"], notes.trim());

    let id = order["id"].as_str().unwrap();
    let response = app
        .server
        .get(&format!("/api/orders/{id}"))
        .authorization_bearer(&user.token)
        .await;
    response.assert_status_ok();
    let fetched: Value = response.json();
    assert_eq!(fetched["id"], order["id"]);

    let list: Value = app
        .server
        .get("/api/orders")
        .authorization_bearer(&user.token)
        .await
        .json();
    assert_eq!(list["count"], 1);
}

#[tokio::test]
async fn test_orders_are_private() {
    let app = TestApp::new();
    let owner = TestUser::resident();
    let stranger = TestUser::resident();

    let order = place(&app, &owner, &margherita_order(2)).await;
    let id = order["id"].as_str().unwrap();

    app.server
        .get(&format!("/api/orders/{id}"))
        .authorization_bearer(&stranger.token)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let list: Value = app
        .server
        .get("/api/orders")
        .authorization_bearer(&stranger.token)
        .await
        .json();
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_order_rules() {
    let app = TestApp::new();
    let user = TestUser::resident();

    let cases = [
        (
            json!({ "business_id": "harbor-fish-house", "items": [{ "menu_item_id": "harbor-fish-chips", "quantity": 2 }] }),
            StatusCode::CONFLICT,
        ),
        (
            json!({ "business_id": "bella-napoli", "items": [{ "menu_item_id": "green-quinoa-bowl", "quantity": 2 }] }),
            StatusCode::BAD_REQUEST,
        ),
        (
            json!({ "business_id": "al-nakheel-grill", "items": [{ "menu_item_id": "nakheel-kunafa", "quantity": 3 }] }),
            StatusCode::BAD_REQUEST,
        ),
        (
            json!({ "business_id": "bella-napoli", "items": [{ "menu_item_id": "napoli-sparkling-water", "quantity": 1 }] }),
            StatusCode::BAD_REQUEST,
        ),
        (
            json!({ "business_id": "bella-napoli", "items": [{ "menu_item_id": "napoli-margherita", "quantity": 100 }] }),
            StatusCode::BAD_REQUEST,
        ),
        (
            json!({ "business_id": "bella-napoli", "items": [] }),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (body, expected) in cases {
        let response = app
            .server
            .post("/api/orders")
            .authorization_bearer(&user.token)
            .json(&body)
            .await;
        assert_eq!(response.status_code(), expected, "body: {body}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();
    let user = TestUser::resident();

    let response = app
        .server
        .post("/api/orders")
        .authorization_bearer(&user.token)
        .json(&json!({ "business_id": "bella-napoli" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10002);
}

#[tokio::test]
async fn test_validation_lists_every_invalid_field() {
    let app = TestApp::new();
    let user = TestUser::resident();
    let items: Vec<Value> = (0..51)
        .map(|_| json!({ "menu_item_id": "napoli-margherita", "quantity": 1 }))
        .collect();

    let response = app
        .server
        .post("/api/orders")
        .authorization_bearer(&user.token)
        .json(&json!({ "business_id": "", "items": items }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], 10007);
    assert_eq!(body["message"], "business_id: Business id is required");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["business_id", "items"]);
}

#[tokio::test]
async fn test_cancel_pending_order_once() {
    let app = TestApp::new();
    let user = TestUser::resident();
    let order = place(&app, &user, &margherita_order(2)).await;
    let uri = format!("/api/orders/{}/cancel", order["id"].as_str().unwrap());

    let response = app.server.post(&uri).authorization_bearer(&user.token).await;
    response.assert_status_ok();
    let cancelled: Value = response.json();
    assert_eq!(cancelled["status"], "cancelled");

    app.server
        .post(&uri)
        .authorization_bearer(&user.token)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_staff_advances_status() {
    let app = TestApp::new();
    let user = TestUser::resident();
    let staff = TestUser::staff();
    let order = place(&app, &user, &margherita_order(2)).await;
    let id = order["id"].as_str().unwrap();
    let status_uri = format!("/api/orders/{id}/status");

    // Residents cannot drive the kitchen
    app.server
        .patch(&status_uri)
        .authorization_bearer(&user.token)
        .json(&json!({ "status": "confirmed" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    for next in ["confirmed", "preparing"] {
        let response = app
            .server
            .patch(&status_uri)
            .authorization_bearer(&staff.token)
            .json(&json!({ "status": next }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], next);
    }

    // Skipping ahead is rejected
    app.server
        .patch(&status_uri)
        .authorization_bearer(&staff.token)
        .json(&json!({ "status": "delivered" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    // Too late for the customer to cancel
    app.server
        .post(&format!("/api/orders/{id}/cancel"))
        .authorization_bearer(&user.token)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_status_and_bad_id() {
    let app = TestApp::new();
    let staff = TestUser::staff();

    app.server
        .patch("/api/orders/not-a-uuid/status")
        .authorization_bearer(&staff.token)
        .json(&json!({ "status": "confirmed" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .patch(&format!("/api/orders/{}/status", uuid::Uuid::new_v4()))
        .authorization_bearer(&staff.token)
        .json(&json!({ "status": "teleported" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .patch(&format!("/api/orders/{}/status", uuid::Uuid::new_v4()))
        .authorization_bearer(&staff.token)
        .json(&json!({ "status": "confirmed" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
