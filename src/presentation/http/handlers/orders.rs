//! Order Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::dto::request::{PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::application::dto::response::{ListResponse, OrderResponse, QuoteResponse};
use crate::application::services::{OrderService, OrderServiceImpl};
use crate::domain::OrderStatus;
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn order_service(state: &AppState) -> OrderServiceImpl {
    OrderServiceImpl::new(Arc::clone(&state.orders), Arc::clone(&state.catalog))
}

fn parse_order_id(order_id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(order_id).map_err(|_| AppError::BadRequest("Invalid order ID".into()))
}

/// Price a cart without placing it
pub async fn quote_order(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<PlaceOrderRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = order_service(&state).quote(&body)?;
    Ok(Json(quote.into()))
}

/// Place an order
pub async fn place_order(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = order_service(&state).place_order(user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

/// The caller's orders, newest first
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Json<ListResponse<OrderResponse>>, AppError> {
    let orders = order_service(&state).list_orders(user.id).await?;
    let orders: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(Json(orders.into()))
}

pub async fn get_order(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, AppError> {
    let order_id = parse_order_id(&order_id)?;
    let order = order_service(&state).get_order(user.id, order_id).await?;
    Ok(Json(order.into()))
}

/// Cancel one of the caller's orders while it is pending or confirmed
pub async fn cancel_order(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, AppError> {
    let order_id = parse_order_id(&order_id)?;
    let order = order_service(&state).cancel_order(user.id, order_id).await?;
    Ok(Json(order.into()))
}

/// Staff: move an order along its lifecycle
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order_id = parse_order_id(&order_id)?;
    let status = OrderStatus::parse(&body.status)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown order status '{}'", body.status)))?;

    let order = order_service(&state).advance_status(order_id, status).await?;
    Ok(Json(order.into()))
}
