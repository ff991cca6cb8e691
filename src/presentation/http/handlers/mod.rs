//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod account;
pub mod business;
pub mod directory;
pub mod guides;
pub mod health;
pub mod menu;
pub mod orders;
pub mod root;
pub mod transport;
