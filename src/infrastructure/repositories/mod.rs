//! Repository Implementations
//!
//! Implementations of the domain `OrderRepository` trait.
//!
//! - **PgOrderRepository**: managed PostgreSQL, used when `database.url` is set
//! - **InMemoryOrderRepository**: process-local store for development and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::domain::OrderRepository;
//! use crate::infrastructure::repositories::{InMemoryOrderRepository, PgOrderRepository};
//!
//! let orders: Arc<dyn OrderRepository> = match pool {
//!     Some(pool) => Arc::new(PgOrderRepository::new(pool)),
//!     None => Arc::new(InMemoryOrderRepository::new()),
//! };
//! ```

pub mod memory_order_repository;
pub mod order_repository;

pub use memory_order_repository::InMemoryOrderRepository;
pub use order_repository::PgOrderRepository;
