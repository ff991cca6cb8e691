//! Remote verification against the auth provider's user endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::services::{resolve_role, AppMetadata, AuthError, TokenVerifier, VerifiedUser};

/// Body of `GET /auth/v1/user`
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: Uuid,
    email: Option<String>,
    role: Option<String>,
    #[serde(default)]
    app_metadata: Option<AppMetadata>,
}

/// Asks the provider who a token belongs to on every call.
///
/// Revoked sessions are rejected immediately, at the cost of one provider
/// round trip per request.
pub struct ProviderTokenVerifier {
    client: Client,
    user_url: String,
    anon_key: String,
}

impl ProviderTokenVerifier {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Internal(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_url: format!("{}/auth/v1/user", base_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        })
    }
}

#[async_trait]
impl TokenVerifier for ProviderTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError> {
        let response = self
            .client
            .get(&self.user_url)
            .bearer_auth(token)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let user: ProviderUser = response
                    .json()
                    .await
                    .map_err(|e| AuthError::ProviderUnavailable(format!("bad user body: {}", e)))?;
                Ok(VerifiedUser {
                    id: user.id,
                    email: user.email,
                    role: resolve_role(user.app_metadata, user.role),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidToken),
            status => Err(AuthError::ProviderUnavailable(format!(
                "unexpected status {}",
                status
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn verifier(server: &MockServer) -> ProviderTokenVerifier {
        ProviderTokenVerifier::new(&server.base_url(), "anon-key", Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_accepts_known_token() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/auth/v1/user")
                    .header("apikey", "anon-key")
                    .header("authorization", "Bearer good-token");
                then.status(200).json_body(json!({
                    "id": id,
                    "email": "resident@example.com",
                    "role": "authenticated",
                    "aud": "authenticated"
                }));
            })
            .await;

        let user = verifier(&server).verify("good-token").await.unwrap();
        mock.assert_async().await;
        assert_eq!(user.id, id);
        assert_eq!(user.email.as_deref(), Some("resident@example.com"));
        assert!(!user.is_staff());
    }

    #[tokio::test]
    async fn test_staff_marked_in_app_metadata() {
        let server = MockServer::start_async().await;
        let id = Uuid::new_v4();
        server
            .mock_async(|when, then| {
                when.method(GET).path("/auth/v1/user");
                then.status(200).json_body(json!({
                    "id": id,
                    "role": "authenticated",
                    "app_metadata": { "provider": "email", "role": "service_role" }
                }));
            })
            .await;

        let user = verifier(&server).verify("staff-token").await.unwrap();
        assert!(user.is_staff());
    }

    #[tokio::test]
    async fn test_rejected_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/auth/v1/user");
                then.status(401).json_body(json!({ "msg": "invalid JWT" }));
            })
            .await;

        let result = verifier(&server).verify("bad-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_provider_error_is_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/auth/v1/user");
                then.status(503);
            })
            .await;

        let result = verifier(&server).verify("any").await;
        assert!(matches!(result, Err(AuthError::ProviderUnavailable(_))));
    }

    #[test]
    fn test_user_url_trims_trailing_slash() {
        let v = ProviderTokenVerifier::new("https://project.supabase.co/", "k", Duration::from_secs(1))
            .unwrap();
        assert_eq!(v.user_url, "https://project.supabase.co/auth/v1/user");
    }
}
