//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use std::any::Any;

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{
    auth_middleware, create_cors_layer, create_security_headers_layer, create_trace_layer,
    error_detail, limit_auth_failures, panic_response, rate_limit_api, require_staff,
    track_metrics,
};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let is_development = state.settings.is_development();

    Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api_routes(state.clone()))
        .fallback(handlers::root::not_found)
        // Innermost first: metrics see the final status of every response
        .layer(middleware::from_fn(track_metrics))
        .layer(middleware::from_fn_with_state(state.clone(), error_detail))
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, is_development),
        ))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(&state.settings.cors))
        .layer(create_security_headers_layer(is_development))
        .layer(create_trace_layer())
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// `/api` routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(public_routes(state.clone()))
        .merge(protected_routes(state))
}

/// Probes stay outside rate limiting
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
}

/// Catalog routes (public, limited per client address)
fn public_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/business", get(handlers::business::list_businesses))
        .route("/business/{id}", get(handlers::business::get_business))
        .route("/business/{id}/menu", get(handlers::business::get_business_menu))
        .route("/menu", get(handlers::menu::list_menu))
        .route("/menu/categories", get(handlers::menu::list_categories))
        .route("/menu/{id}", get(handlers::menu::get_menu_item))
        .route("/transport", get(handlers::transport::list_hubs))
        .route("/transport/{id}", get(handlers::transport::get_hub))
        .route("/services", get(handlers::guides::list_guides))
        .route("/services/{id}", get(handlers::guides::get_guide))
        .route_layer(middleware::from_fn_with_state(state, rate_limit_api))
}

/// Routes behind a bearer token, limited per user
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::account::me))
        .route("/directory", get(handlers::directory::list_contacts))
        .merge(order_routes())
        // Layers run bottom-up: rejected credentials are counted per address,
        // then the user is known before the limiter keys on it
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit_api))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .route_layer(middleware::from_fn_with_state(state, limit_auth_failures))
}

fn order_routes() -> Router<AppState> {
    let staff = Router::new()
        .route("/orders/{id}/status", patch(handlers::orders::update_order_status))
        .route_layer(middleware::from_fn(require_staff));

    Router::new()
        .route(
            "/orders",
            get(handlers::orders::list_orders).post(handlers::orders::place_order),
        )
        .route("/orders/quote", post(handlers::orders::quote_order))
        .route("/orders/{id}", get(handlers::orders::get_order))
        .route("/orders/{id}/cancel", post(handlers::orders::cancel_order))
        .merge(staff)
}
