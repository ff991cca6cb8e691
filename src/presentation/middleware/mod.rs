//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod rate_limit;
pub mod security;

pub use auth::{auth_middleware, require_staff, AuthUser};
pub use cors::create_cors_layer;
pub use errors::{error_detail, panic_response};
pub use logging::create_trace_layer;
pub use metrics::track_metrics;
pub use rate_limit::{limit_auth_failures, rate_limit_api, RateLimitInfo, RateLimiter};
pub use security::{create_security_headers_layer, SecurityHeadersConfig, SecurityHeadersLayer};
