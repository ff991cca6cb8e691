//! Account Handlers

use axum::{extract::Extension, Json};

use crate::application::dto::response::MeResponse;
use crate::presentation::middleware::AuthUser;

/// The user the bearer token belongs to
pub async fn me(Extension(AuthUser(user)): Extension<AuthUser>) -> Json<MeResponse> {
    Json(user.into())
}
