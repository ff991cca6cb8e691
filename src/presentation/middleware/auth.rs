//! Authentication Middleware
//!
//! Bearer token validation for protected routes. The token itself is
//! checked by the configured [`TokenVerifier`](crate::application::services::TokenVerifier).

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::application::services::VerifiedUser;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone)]
pub struct AuthUser(pub VerifiedUser);

/// Authentication middleware that validates bearer tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !request.headers().contains_key(AUTHORIZATION) {
        metrics::record_auth_failure("missing");
        return Err(AppError::Unauthorized("Missing authorization header".into()));
    }

    let Authorization(bearer) = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| {
            metrics::record_auth_failure("malformed");
            AppError::Unauthorized("Invalid authorization header format".into())
        })?;

    let user = state.verifier.verify(bearer.token()).await.map_err(|e| {
        metrics::record_auth_failure("rejected");
        tracing::debug!(error = %e, "Bearer token rejected");
        AppError::from(e)
    })?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

/// Staff-only guard; must run after [`auth_middleware`]
pub async fn require_staff(request: Request, next: Next) -> Result<Response, AppError> {
    match request.extensions().get::<AuthUser>() {
        Some(AuthUser(user)) if user.is_staff() => Ok(next.run(request).await),
        Some(AuthUser(user)) => {
            tracing::warn!(user_id = %user.id, "Staff route refused");
            Err(AppError::Forbidden("Staff access required".into()))
        }
        None => Err(AppError::Unauthorized("Missing authorization header".into())),
    }
}
