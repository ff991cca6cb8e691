//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::CatalogQuery;

/// One requested line; duplicates of the same item are merged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub menu_item_id: String,
    pub quantity: u32,
}

/// Place order / quote request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    #[validate(length(min = 1, message = "Business id is required"))]
    pub business_id: String,

    #[validate(length(min = 1, max = 50, message = "An order must have 1-50 lines"))]
    pub items: Vec<OrderItemRequest>,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

/// Staff status update
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// `GET /api/menu` query
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub business_id: Option<String>,
}

impl MenuQuery {
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery::new(self.q.clone(), self.category.clone())
    }
}

/// `GET /api/transport` query; `kind` filters on the hub kind
#[derive(Debug, Default, Deserialize)]
pub struct TransportQuery {
    pub q: Option<String>,
    pub kind: Option<String>,
}

impl From<TransportQuery> for CatalogQuery {
    fn from(query: TransportQuery) -> Self {
        CatalogQuery::new(query.q, query.kind)
    }
}

/// `GET /api/directory` query; `department` is the category
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub department: Option<String>,
}

impl From<DirectoryQuery> for CatalogQuery {
    fn from(query: DirectoryQuery) -> Self {
        CatalogQuery::new(query.q, query.department)
    }
}
