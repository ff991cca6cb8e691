//! # Domain Layer
//!
//! Catalog records, search, cart arithmetic and orders. Independent of
//! HTTP, storage and the auth provider.
//!
//! ## Structure
//!
//! - **entities**: catalog records, `Order` and the `OrderRepository` contract
//! - **search**: `Searchable` and `CatalogQuery`, the filter every list uses
//! - **cart**: quantity counters and pricing

pub mod cart;
pub mod entities;
pub mod search;

// Re-export commonly used types
pub use cart::{Cart, CartError, CartLine, MAX_LINE_QUANTITY};
pub use entities::*;
pub use search::{CatalogQuery, Searchable};
