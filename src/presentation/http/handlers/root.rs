//! Root and Fallback Handlers

use axum::{
    http::{Method, Uri},
    Json,
};
use serde::Serialize;

use crate::shared::error::AppError;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub description: &'static str,
    pub auth: bool,
}

const fn endpoint(path: &'static str, description: &'static str, auth: bool) -> Endpoint {
    Endpoint {
        path,
        description,
        auth,
    }
}

/// Welcome document listing the route groups
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        name: "Citizen Services API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            endpoint("/api/health", "Service health and readiness", false),
            endpoint("/api/business", "Restaurants and their menus", false),
            endpoint("/api/menu", "Menu search across all restaurants", false),
            endpoint("/api/transport", "Bus, metro, rail, ferry and taxi hubs", false),
            endpoint("/api/services", "Government service guides", false),
            endpoint("/api/directory", "Municipal staff directory", true),
            endpoint("/api/orders", "Food orders", true),
            endpoint("/api/me", "The signed-in user", true),
        ],
    })
}

/// 404 for every unrouted request
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} {} not found", method, uri.path()))
}
