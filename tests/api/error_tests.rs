//! Error Rendering Tests
//!
//! Runs the API over an order store that always fails.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use citizen_services::domain::{Order, OrderRepository, OrderStatus};
use citizen_services::shared::error::AppError;

use crate::common::{test_settings, TestApp, TestUser};

struct BrokenOrderStore;

#[async_trait]
impl OrderRepository for BrokenOrderStore {
    async fn create(&self, _order: &Order) -> Result<Order, AppError> {
        Err(AppError::Internal("order store offline".into()))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Order>, AppError> {
        Err(AppError::Internal("order store offline".into()))
    }

    async fn find_by_user(&self, _user_id: Uuid) -> Result<Vec<Order>, AppError> {
        Err(AppError::Internal("order store offline".into()))
    }

    async fn update_status(
        &self,
        _id: Uuid,
        _from: OrderStatus,
        _to: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        Err(AppError::Internal("order store offline".into()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Internal("order store offline".into()))
    }
}

fn broken_app(environment: &str) -> TestApp {
    let mut state = TestApp::state(test_settings(environment), |_| {});
    state.orders = Arc::new(BrokenOrderStore);
    TestApp::from_state(state)
}

async fn list_orders(app: &TestApp) -> Value {
    let user = TestUser::resident();
    let response = app
        .server
        .get("/api/orders")
        .authorization_bearer(&user.token)
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.json()
}

#[tokio::test]
async fn test_internal_error_detail_in_development() {
    let body = list_orders(&broken_app("development")).await;

    assert_eq!(body["code"], 10000);
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["detail"], "order store offline");
}

#[tokio::test]
async fn test_internal_error_detail_hidden_in_production() {
    let body = list_orders(&broken_app("production")).await;

    assert_eq!(body["code"], 10000);
    assert!(body.get("detail").is_none());
}

#[tokio::test]
async fn test_readiness_fails_without_order_store() {
    let app = broken_app("production");

    let response = app.server.get("/api/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
}
