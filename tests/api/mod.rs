//! REST API endpoint tests

mod auth_tests;
mod catalog_tests;
mod error_tests;
mod health_tests;
mod order_tests;
mod rate_limit_tests;
