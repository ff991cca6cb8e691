//! Authentication Service
//!
//! Credentials are issued by the external auth provider; this service only
//! answers "who does this bearer token belong to". Implementations live in
//! `infrastructure::auth`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Provider role that grants staff operations.
///
/// Staff accounts carry it in `app_metadata.role`, which only the provider's
/// admin API can write; the top-level `role` claim of a user session is
/// always `authenticated`.
pub const STAFF_ROLE: &str = "service_role";

const DEFAULT_ROLE: &str = "authenticated";

/// Token verifier trait for dependency injection
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Resolve a bearer token to the user it was issued for.
    async fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError>;
}

/// The user a valid token belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub role: String,
}

impl VerifiedUser {
    pub fn is_staff(&self) -> bool {
        self.role == STAFF_ROLE
    }
}

/// JWT claims issued by the auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID, a UUID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Audience
    pub aud: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<AppMetadata>,
}

/// Server-managed user metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// `app_metadata.role` wins over the session role claim.
pub fn resolve_role(app_metadata: Option<AppMetadata>, role: Option<String>) -> String {
    app_metadata
        .and_then(|m| m.role)
        .or(role)
        .unwrap_or_else(|| DEFAULT_ROLE.into())
}

impl Claims {
    /// Turn verified claims into a user.
    pub fn into_user(self) -> Result<VerifiedUser, AuthError> {
        let id = Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(VerifiedUser {
            id,
            email: self.email,
            role: resolve_role(self.app_metadata, self.role),
        })
    }
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Auth provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired | AuthError::InvalidToken => {
                AppError::Unauthorized("Invalid or expired token".into())
            }
            AuthError::ProviderUnavailable(reason) => {
                // The token could not be vouched for, so the request is
                // still unauthenticated.
                tracing::warn!(%reason, "Auth provider unavailable");
                AppError::Unauthorized("Invalid or expired token".into())
            }
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
