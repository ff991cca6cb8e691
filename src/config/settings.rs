//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (managed PostgreSQL)
    pub database: DatabaseSettings,

    /// Redis configuration (optional rate limit store)
    #[serde(default)]
    pub redis: RedisSettings,

    /// Bearer token verification against the auth provider
    pub auth: AuthSettings,

    /// Rate limiting configuration
    pub rate_limit: RateLimitSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
///
/// When `url` is absent, orders are kept in memory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Run embedded migrations on startup
    pub run_migrations: bool,
}

/// Redis configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedisSettings {
    pub url: Option<String>,
}

/// How bearer tokens are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Verify the provider-issued JWT locally with the shared secret
    Jwt,
    /// Ask the provider's user endpoint about every token
    Provider,
}

/// Auth provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub mode: AuthMode,

    /// Provider JWT secret (jwt mode)
    pub jwt_secret: Option<String>,

    /// Expected `aud` claim
    pub audience: String,

    /// Provider base URL, e.g. https://<project>.supabase.co (provider mode)
    pub provider_url: Option<String>,

    /// Public API key sent as the `apikey` header (provider mode)
    pub anon_key: Option<String>,

    /// Timeout for provider calls in seconds
    pub request_timeout_secs: u64,
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Requests allowed per window for each client
    pub max_requests: u32,

    /// Window duration in seconds
    pub window_seconds: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Minimum required length for the provider JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml
    /// 3. config/{RUN_ENV}.toml
    /// 4. `APP__SECTION__KEY` environment variables
    /// 5. conventional variables (`PORT`, `DATABASE_URL`, `SUPABASE_URL`, ...)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if [`Settings::validate`] rejects it.
    pub fn load() -> Result<Self, ConfigError> {
        super::load_env_file();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let settings: Self = Self::defaults(Config::builder(), &environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option("auth.provider_url", std::env::var("SUPABASE_URL").ok())?
            .set_override_option("auth.anon_key", std::env::var("SUPABASE_ANON_KEY").ok())?
            .set_override_option("auth.jwt_secret", std::env::var("SUPABASE_JWT_SECRET").ok())?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Settings with only the built-in defaults applied.
    ///
    /// Used by tests and tools that do not want files or the environment
    /// to leak in.
    pub fn from_defaults(environment: &str) -> Result<Self, ConfigError> {
        Self::defaults(Config::builder(), environment)?
            .build()?
            .try_deserialize()
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("auth.mode", "jwt")?
            .set_default("auth.audience", "authenticated")?
            .set_default("auth.request_timeout_secs", 5)?
            // 100 requests per 15 minutes
            .set_default("rate_limit.max_requests", 100)?
            .set_default("rate_limit.window_seconds", 900)?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    /// Check cross-field requirements the deserializer cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.auth.mode {
            AuthMode::Jwt => {
                let len = self.auth.jwt_secret.as_deref().map(str::len).unwrap_or(0);
                if len < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::Message(format!(
                        "auth.jwt_secret must be at least {} characters in jwt mode. Current length: {}",
                        MIN_JWT_SECRET_LENGTH, len
                    )));
                }
            }
            AuthMode::Provider => {
                if self.auth.provider_url.as_deref().unwrap_or("").is_empty() {
                    return Err(ConfigError::Message(
                        "auth.provider_url is required in provider mode".into(),
                    ));
                }
                if self.auth.anon_key.as_deref().unwrap_or("").is_empty() {
                    return Err(ConfigError::Message(
                        "auth.anon_key is required in provider mode".into(),
                    ));
                }
            }
        }

        if self.rate_limit.max_requests == 0 || self.rate_limit.window_seconds == 0 {
            return Err(ConfigError::Message(
                "rate_limit.max_requests and rate_limit.window_seconds must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Whether internal error details may be exposed in responses.
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
