//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use citizen_services::application::services::{AppMetadata, Claims, STAFF_ROLE};
use citizen_services::config::Settings;
use citizen_services::infrastructure::auth::JwtTokenVerifier;
use citizen_services::startup::{build_router, AppState};

pub const TEST_SECRET: &str = "integration-secret-integration-secret";
pub const AUDIENCE: &str = "authenticated";

/// Test application backed by the in-memory order store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(|_| {})
    }

    /// Build with settings adjusted by `configure`.
    pub fn with_settings(configure: impl FnOnce(&mut Settings)) -> Self {
        let state = Self::state(test_settings("test"), configure);
        Self::from_state(state)
    }

    /// Default in-memory state, for tests that swap in their own parts.
    pub fn state(mut settings: Settings, configure: impl FnOnce(&mut Settings)) -> AppState {
        configure(&mut settings);
        let verifier = Arc::new(JwtTokenVerifier::new(TEST_SECRET, AUDIENCE));
        AppState::in_memory(settings, verifier)
    }

    pub fn from_state(state: AppState) -> Self {
        let server = TestServer::new(build_router(state)).expect("test server");
        Self { server }
    }
}

pub fn test_settings(environment: &str) -> Settings {
    let mut settings = Settings::from_defaults(environment).expect("default settings");
    settings.auth.jwt_secret = Some(TEST_SECRET.into());
    settings
}

/// A signed-in resident
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestUser {
    pub fn resident() -> Self {
        Self::with_app_role(None)
    }

    /// A user session whose account was marked staff by an administrator
    pub fn staff() -> Self {
        Self::with_app_role(Some(STAFF_ROLE))
    }

    fn with_app_role(app_role: Option<&str>) -> Self {
        let id = Uuid::new_v4();
        let token = sign(Claims {
            sub: id.to_string(),
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
            aud: AUDIENCE.into(),
            email: Some(format!("{}@example.com", &id.to_string()[..8])),
            role: Some("authenticated".into()),
            app_metadata: Some(AppMetadata {
                role: app_role.map(String::from),
            }),
        });
        Self { id, token }
    }
}

/// Sign claims with the test secret
pub fn sign(claims: Claims) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("sign token")
}

pub fn expired_token() -> String {
    sign(Claims {
        sub: Uuid::new_v4().to_string(),
        exp: Utc::now().timestamp() - 3600,
        iat: Utc::now().timestamp() - 7200,
        aud: AUDIENCE.into(),
        email: None,
        role: None,
        app_metadata: None,
    })
}
