//! Token Verifiers
//!
//! `TokenVerifier` implementations backed by the external auth provider.

mod jwt_verifier;
mod provider_verifier;

use std::sync::Arc;
use std::time::Duration;

pub use jwt_verifier::JwtTokenVerifier;
pub use provider_verifier::ProviderTokenVerifier;

use crate::application::services::{AuthError, TokenVerifier};
use crate::config::{AuthMode, AuthSettings};

/// Build the verifier selected by `auth.mode`.
pub fn create_verifier(settings: &AuthSettings) -> Result<Arc<dyn TokenVerifier>, AuthError> {
    match settings.mode {
        AuthMode::Jwt => {
            let secret = settings
                .jwt_secret
                .as_deref()
                .ok_or_else(|| AuthError::Internal("auth.jwt_secret is not set".into()))?;
            Ok(Arc::new(JwtTokenVerifier::new(secret, &settings.audience)))
        }
        AuthMode::Provider => {
            let url = settings
                .provider_url
                .as_deref()
                .ok_or_else(|| AuthError::Internal("auth.provider_url is not set".into()))?;
            let key = settings
                .anon_key
                .as_deref()
                .ok_or_else(|| AuthError::Internal("auth.anon_key is not set".into()))?;
            Ok(Arc::new(ProviderTokenVerifier::new(
                url,
                key,
                Duration::from_secs(settings.request_timeout_secs),
            )?))
        }
    }
}
