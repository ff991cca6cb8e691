//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{BusinessDetail, OrderQuote, VerifiedUser};
use crate::domain::{Business, CartLine, MenuItem, Order};

/// Envelope for every list endpoint
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}

/// Business with its full menu
#[derive(Debug, Serialize)]
pub struct BusinessDetailResponse {
    #[serde(flatten)]
    pub business: Business,
    pub menu: Vec<MenuItem>,
}

impl From<BusinessDetail> for BusinessDetailResponse {
    fn from(detail: BusinessDetail) -> Self {
        Self {
            business: detail.business,
            menu: detail.menu,
        }
    }
}

/// Priced order line
#[derive(Debug, Serialize)]
pub struct OrderLineResponse {
    pub menu_item_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
}

impl From<CartLine> for OrderLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            line_total_cents: line.line_total_cents(),
            menu_item_id: line.menu_item_id,
            name: line.name,
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity,
        }
    }
}

/// Cart pricing, nothing persisted
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub business_id: String,
    pub lines: Vec<OrderLineResponse>,
    pub item_count: u32,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl From<OrderQuote> for QuoteResponse {
    fn from(quote: OrderQuote) -> Self {
        Self {
            item_count: quote.item_count(),
            business_id: quote.business_id,
            lines: quote.lines.into_iter().map(Into::into).collect(),
            subtotal_cents: quote.subtotal_cents,
            delivery_fee_cents: quote.delivery_fee_cents,
            total_cents: quote.total_cents,
        }
    }
}

/// Order response
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub business_id: String,
    pub status: String,
    pub lines: Vec<OrderLineResponse>,
    pub item_count: u32,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            item_count: order.item_count(),
            status: order.status.to_string(),
            business_id: order.business_id,
            lines: order.lines.into_iter().map(Into::into).collect(),
            subtotal_cents: order.subtotal_cents,
            delivery_fee_cents: order.delivery_fee_cents,
            total_cents: order.total_cents,
            notes: order.notes,
            created_at: order.created_at.to_rfc3339(),
            updated_at: order.updated_at.to_rfc3339(),
        }
    }
}

/// The caller, as resolved from the bearer token
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    pub is_staff: bool,
}

impl From<VerifiedUser> for MeResponse {
    fn from(user: VerifiedUser) -> Self {
        Self {
            is_staff: user.is_staff(),
            id: user.id.to_string(),
            email: user.email,
            role: user.role,
        }
    }
}
