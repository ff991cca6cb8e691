//! Application Services
//!
//! Use cases behind the HTTP handlers.

pub mod auth_service;
pub mod catalog_service;
pub mod order_service;

pub use auth_service::{
    resolve_role, AppMetadata, AuthError, Claims, TokenVerifier, VerifiedUser, STAFF_ROLE,
};
pub use catalog_service::{BusinessDetail, CatalogError, CatalogService};
pub use order_service::{OrderError, OrderQuote, OrderService, OrderServiceImpl};
