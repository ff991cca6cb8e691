//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Seeded static catalogs
//! - Order repositories (PostgreSQL, in-memory)
//! - Token verifiers for the external auth provider
//! - Redis connection for the distributed rate limiter
//! - Prometheus metrics

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod database;
pub mod metrics;
pub mod repositories;
