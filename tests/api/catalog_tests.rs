//! Catalog API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_case::test_case;

use crate::common::{TestApp, TestUser};

fn ids(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["id"].as_str().expect("id").to_string())
        .collect()
}

#[test_case("/api/business", 4 ; "all businesses")]
#[test_case("/api/business?category=italian", 1 ; "businesses by cuisine")]
#[test_case("/api/menu?q=pizza", 2 ; "menu text search")]
#[test_case("/api/menu?q=falafel", 2 ; "menu search across businesses")]
#[test_case("/api/menu?business_id=green-bowl", 3 ; "menu of one business")]
#[test_case("/api/transport?kind=metro", 2 ; "hubs by kind")]
#[test_case("/api/services?category=documents", 2 ; "guides by category")]
#[test_case("/api/menu?q=sushi", 0 ; "no match is empty")]
#[tokio::test]
async fn test_list_counts(uri: &str, expected: usize) {
    let app = TestApp::new();

    let response = app.server.get(uri).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], expected);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(expected));
}

#[tokio::test]
async fn test_multi_term_search_needs_every_term() {
    let app = TestApp::new();

    let body: Value = app.server.get("/api/transport?q=blue%20line").await.json();
    assert_eq!(ids(&body), vec!["city-center-metro", "university-metro"]);

    let body: Value = app.server.get("/api/transport?q=red%20line").await.json();
    assert_eq!(ids(&body), vec!["city-center-metro"]);
}

#[tokio::test]
async fn test_business_detail_includes_menu() {
    let app = TestApp::new();

    let response = app.server.get("/api/business/bella-napoli").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Bella Napoli");
    assert_eq!(body["menu"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_business_menu_filters_by_category() {
    let app = TestApp::new();

    let body: Value = app
        .server
        .get("/api/business/al-nakheel-grill/menu?category=wraps")
        .await
        .json();

    assert_eq!(
        ids(&body),
        vec!["nakheel-chicken-shawarma", "nakheel-falafel-wrap"]
    );
}

#[test_case("/api/business/nowhere" ; "business")]
#[test_case("/api/business/nowhere/menu" ; "business menu")]
#[test_case("/api/menu/nothing" ; "menu item")]
#[test_case("/api/transport/nowhere" ; "transport hub")]
#[test_case("/api/services/nothing" ; "service guide")]
#[tokio::test]
async fn test_unknown_id_is_not_found(uri: &str) {
    let app = TestApp::new();

    let response = app.server.get(uri).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], 10001);
}

#[tokio::test]
async fn test_menu_categories_are_sorted_and_distinct() {
    let app = TestApp::new();

    let body: Value = app.server.get("/api/menu/categories").await.json();
    let categories: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();

    let mut sorted = categories.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(categories, sorted);
    assert!(categories.contains(&"Pizza"));
}

#[tokio::test]
async fn test_service_guide_detail() {
    let app = TestApp::new();

    let response = app.server.get("/api/services/passport-application").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(!body["steps"].as_array().unwrap().is_empty());
    assert!(!body["offices"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_directory_requires_sign_in() {
    let app = TestApp::new();

    app.server
        .get("/api/directory")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let user = TestUser::resident();
    let response = app
        .server
        .get("/api/directory?department=Citizen%20Affairs")
        .authorization_bearer(&user.token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(ids(&body), vec!["citizen-affairs-desk", "sara-alharbi"]);
}
