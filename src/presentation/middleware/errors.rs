//! Error Rendering Middleware
//!
//! 500 responses never carry their cause, except in development where the
//! cause is added as `detail`. Panics in handlers are rendered the same way.

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::shared::error::{ErrorDetail, ErrorResponse};
use crate::startup::AppState;

/// Strip [`ErrorDetail`] from responses, surfacing it in development.
pub async fn error_detail(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let detail = response.extensions_mut().remove::<ErrorDetail>();
    let Some(ErrorDetail(detail)) = detail else {
        return response;
    };
    if !state.settings.is_development() {
        return response;
    }

    let mut body = ErrorResponse::internal();
    body.detail = Some(detail);

    let mut rebuilt = (response.status(), Json(body)).into_response();
    for (name, value) in response.headers() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rebuilt.headers_mut().append(name.clone(), value.clone());
        }
    }
    rebuilt
}

/// Response for a panicked handler, for `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>, is_development: bool) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %message, "Handler panicked");

    let mut body = ErrorResponse::internal();
    if is_development {
        body.detail = Some(message);
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
