//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use redis::aio::ConnectionManager;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};

use crate::application::services::TokenVerifier;
use crate::config::Settings;
use crate::domain::OrderRepository;
use crate::infrastructure::catalog::Catalog;
use crate::infrastructure::repositories::{InMemoryOrderRepository, PgOrderRepository};
use crate::infrastructure::{auth, cache, database};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::RateLimiter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<dyn OrderRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub rate_limiter: RateLimiter,
    /// Present when orders are stored in Postgres
    pub db: Option<PgPool>,
    /// Present when rate limits are shared through Redis
    pub redis: Option<ConnectionManager>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State without external services: seeded catalog, in-memory orders
    /// and an in-process rate limiter.
    pub fn in_memory(settings: Settings, verifier: Arc<dyn TokenVerifier>) -> Self {
        let rate_limiter = RateLimiter::from_settings(&settings.rate_limit, None);
        Self {
            catalog: Arc::new(Catalog::seeded()),
            orders: Arc::new(InMemoryOrderRepository::new()),
            verifier,
            rate_limiter,
            db: None,
            redis: None,
            settings: Arc::new(settings),
        }
    }
}

/// Build the full router for `state`
pub fn build_router(state: AppState) -> Router {
    routes::create_router(state)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let verifier = auth::create_verifier(&settings.auth)?;
        tracing::info!(mode = ?settings.auth.mode, "Token verifier ready");

        let (db, orders): (Option<PgPool>, Arc<dyn OrderRepository>) =
            match settings.database.url.as_deref() {
                Some(url) => {
                    let pool = database::create_pool(&settings.database, url)
                        .await
                        .context("failed to connect to Postgres")?;
                    tracing::info!("Database connection pool created");
                    if settings.database.run_migrations {
                        database::run_migrations(&pool).await?;
                        tracing::info!("Database migrations applied");
                    }
                    (Some(pool.clone()), Arc::new(PgOrderRepository::new(pool)))
                }
                None => {
                    tracing::warn!("DATABASE_URL not set; orders are kept in memory");
                    (None, Arc::new(InMemoryOrderRepository::new()))
                }
            };

        let redis = match settings.redis.url.as_deref() {
            Some(url) => Some(
                cache::create_redis_client(url)
                    .await
                    .context("failed to connect to Redis")?,
            ),
            None => None,
        };

        let rate_limiter = RateLimiter::from_settings(&settings.rate_limit, redis.clone());
        tracing::info!(
            distributed = rate_limiter.is_distributed(),
            max_requests = settings.rate_limit.max_requests,
            window_seconds = settings.rate_limit.window_seconds,
            "Rate limiter ready"
        );

        let addr = settings.server_addr();
        let state = AppState {
            catalog: Arc::new(Catalog::seeded()),
            orders,
            verifier,
            rate_limiter,
            db,
            redis,
            settings: Arc::new(settings),
        };

        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until SIGINT or SIGTERM
    pub async fn run_until_stopped(self) -> Result<()> {
        let mut sigint = signal(SignalKind::interrupt()).context("unable to listen for SIGINT")?;
        let mut sigterm = signal(SignalKind::terminate()).context("unable to listen for SIGTERM")?;

        let shutdown = async move {
            let signal_name = tokio::select! {
                _ = sigint.recv() => "SIGINT",
                _ = sigterm.recv() => "SIGTERM",
            };
            tracing::info!("Received {signal_name}, shutting down");
        };

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
