//! Order Service
//!
//! Prices carts against the catalog and drives the order lifecycle.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::dto::request::PlaceOrderRequest;
use crate::domain::{Cart, CartError, CartLine, Order, OrderRepository, OrderStatus};
use crate::infrastructure::catalog::Catalog;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// A priced cart that has not been persisted
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuote {
    pub business_id: String,
    pub lines: Vec<CartLine>,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl OrderQuote {
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Order service errors
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Business '{0}' not found")]
    BusinessNotFound(String),

    #[error("{0} is not taking orders right now")]
    BusinessClosed(String),

    #[error("Menu item '{0}' not found")]
    ItemNotFound(String),

    #[error("Menu item '{item}' is not sold by '{business}'")]
    ItemFromOtherBusiness { item: String, business: String },

    #[error("{0} is currently unavailable")]
    ItemUnavailable(String),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Minimum order is {min_cents} cents, cart is {subtotal_cents} cents")]
    BelowMinimum { min_cents: i64, subtotal_cents: i64 },

    #[error("Order not found")]
    NotFound,

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order status changed concurrently, retry")]
    StatusChanged,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound => AppError::NotFound(err.to_string()),
            OrderError::BusinessClosed(_)
            | OrderError::InvalidTransition { .. }
            | OrderError::StatusChanged => AppError::Conflict(err.to_string()),
            OrderError::Repository(e) => e,
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

/// Order service trait for dependency injection
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Price a request without persisting it.
    fn quote(&self, request: &PlaceOrderRequest) -> Result<OrderQuote, OrderError>;

    /// Price and persist a request as a pending order.
    async fn place_order(
        &self,
        user_id: Uuid,
        request: &PlaceOrderRequest,
    ) -> Result<Order, OrderError>;

    /// Orders of `user_id`, newest first.
    async fn list_orders(&self, user_id: Uuid) -> Result<Vec<Order>, OrderError>;

    /// One order of `user_id`. Other users' orders are reported as not found.
    async fn get_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, OrderError>;

    async fn cancel_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, OrderError>;

    /// Staff transition, regardless of owner.
    async fn advance_status(&self, order_id: Uuid, to: OrderStatus) -> Result<Order, OrderError>;
}

/// Order service implementation
pub struct OrderServiceImpl {
    orders: Arc<dyn OrderRepository>,
    catalog: Arc<Catalog>,
}

impl OrderServiceImpl {
    pub fn new(orders: Arc<dyn OrderRepository>, catalog: Arc<Catalog>) -> Self {
        Self { orders, catalog }
    }

    async fn transition(&self, order: Order, to: OrderStatus) -> Result<Order, OrderError> {
        if !order.status.can_transition_to(to) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to,
            });
        }

        let updated = self
            .orders
            .update_status(order.id, order.status, to)
            .await?
            .ok_or(OrderError::StatusChanged)?;

        tracing::info!(order_id = %updated.id, from = %order.status, to = %to, "Order status changed");
        Ok(updated)
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    fn quote(&self, request: &PlaceOrderRequest) -> Result<OrderQuote, OrderError> {
        let business = self
            .catalog
            .business(&request.business_id)
            .ok_or_else(|| OrderError::BusinessNotFound(request.business_id.clone()))?;

        if !business.is_open {
            return Err(OrderError::BusinessClosed(business.name.clone()));
        }

        let mut cart = Cart::new();
        for line in &request.items {
            let item = self
                .catalog
                .menu_item(&line.menu_item_id)
                .ok_or_else(|| OrderError::ItemNotFound(line.menu_item_id.clone()))?;

            if item.business_id != business.id {
                return Err(OrderError::ItemFromOtherBusiness {
                    item: item.id.clone(),
                    business: business.id.clone(),
                });
            }
            if !item.available {
                return Err(OrderError::ItemUnavailable(item.name.clone()));
            }

            cart.add(item, line.quantity)?;
        }

        let subtotal_cents = cart.subtotal_cents();
        if subtotal_cents < business.min_order_cents {
            return Err(OrderError::BelowMinimum {
                min_cents: business.min_order_cents,
                subtotal_cents,
            });
        }

        Ok(OrderQuote {
            business_id: business.id.clone(),
            lines: cart.into_lines(),
            subtotal_cents,
            delivery_fee_cents: business.delivery_fee_cents,
            total_cents: subtotal_cents.saturating_add(business.delivery_fee_cents),
        })
    }

    async fn place_order(
        &self,
        user_id: Uuid,
        request: &PlaceOrderRequest,
    ) -> Result<Order, OrderError> {
        let quote = self.quote(request)?;
        let now = Utc::now();

        let order = Order {
            id: Uuid::now_v7(),
            user_id,
            business_id: quote.business_id,
            lines: quote.lines,
            subtotal_cents: quote.subtotal_cents,
            delivery_fee_cents: quote.delivery_fee_cents,
            total_cents: quote.total_cents,
            status: OrderStatus::Pending,
            notes: request
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
            created_at: now,
            updated_at: now,
        };

        let order = self.orders.create(&order).await?;
        metrics::record_order_placed(&order.business_id);
        tracing::info!(order_id = %order.id, %user_id, total_cents = order.total_cents, "Order placed");
        Ok(order)
    }

    async fn list_orders(&self, user_id: Uuid) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.find_by_user(user_id).await?)
    }

    async fn get_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .filter(|order| order.is_owned_by(user_id))
            .ok_or(OrderError::NotFound)
    }

    async fn cancel_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, OrderError> {
        let order = self.get_order(user_id, order_id).await?;
        self.transition(order, OrderStatus::Cancelled).await
    }

    async fn advance_status(&self, order_id: Uuid, to: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound)?;
        self.transition(order, to).await
    }
}
