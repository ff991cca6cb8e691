//! Rate Limiting Middleware
//!
//! Sliding window rate limiting for the `/api` routes. The window lives in
//! Redis when it is configured, so limits hold across instances, and in
//! process memory otherwise.

use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use redis::aio::ConnectionManager;
use serde::Serialize;

use crate::config::RateLimitSettings;
use crate::presentation::middleware::auth::AuthUser;
use crate::shared::error::ErrorResponse;
use crate::startup::AppState;

const KEY_PREFIX: &str = "ratelimit:api";
/// Window of rejected credentials per client address
const AUTH_FAILURE_PREFIX: &str = "auth-failures";

// ============================================================================
// Rate Limit Response
// ============================================================================

/// Information about rate limit status returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets
    pub reset_at: i64,
    /// Seconds until the rate limit resets
    pub retry_after: u64,
}

/// Rate limit exceeded error response.
#[derive(Debug, Serialize)]
struct RateLimitExceededResponse {
    #[serde(flatten)]
    error: ErrorResponse,
    rate_limit: RateLimitInfo,
}

// ============================================================================
// Rate Limiter Implementation
// ============================================================================

/// Request timestamps (ms) per identifier, oldest first.
///
/// Identifiers whose window has fully expired are swept at most once per
/// window length, so the map only holds clients seen recently.
#[derive(Default)]
struct MemoryWindows {
    windows: DashMap<String, VecDeque<i64>>,
    last_sweep_ms: AtomicI64,
}

impl MemoryWindows {
    fn sweep_expired(&self, now_ms: i64, window_ms: i64) {
        let last = self.last_sweep_ms.load(Ordering::Relaxed);
        if now_ms - last < window_ms {
            return;
        }
        if self
            .last_sweep_ms
            .compare_exchange(last, now_ms, Ordering::AcqRel, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        let window_start = now_ms - window_ms;
        self.windows
            .retain(|_, entries| entries.back().is_some_and(|&ts| ts > window_start));
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.windows.len()
    }
}

#[derive(Clone)]
enum Store {
    Memory(Arc<MemoryWindows>),
    /// Sorted set per identifier, scored by timestamp (ms)
    Redis(ConnectionManager),
}

/// Sliding window rate limiter.
///
/// On each request:
/// 1. Remove entries older than the window
/// 2. Count remaining entries
/// 3. If under limit, record the request and allow
/// 4. If over limit, reject with the time until the oldest entry expires
#[derive(Clone)]
pub struct RateLimiter {
    store: Store,
    max_requests: u32,
    window_seconds: u64,
}

impl RateLimiter {
    /// In-process limiter.
    pub fn in_memory(max_requests: u32, window_seconds: u64) -> Self {
        Self {
            store: Store::Memory(Arc::new(MemoryWindows::default())),
            max_requests,
            window_seconds,
        }
    }

    /// Limiter shared across instances through Redis.
    pub fn redis(redis: ConnectionManager, max_requests: u32, window_seconds: u64) -> Self {
        Self {
            store: Store::Redis(redis),
            max_requests,
            window_seconds,
        }
    }

    pub fn from_settings(settings: &RateLimitSettings, redis: Option<ConnectionManager>) -> Self {
        match redis {
            Some(conn) => Self::redis(conn, settings.max_requests, settings.window_seconds),
            None => Self::in_memory(settings.max_requests, settings.window_seconds),
        }
    }

    pub fn is_distributed(&self) -> bool {
        matches!(self.store, Store::Redis(_))
    }

    /// Check if a request should be allowed.
    ///
    /// Returns `Ok(RateLimitInfo)` if allowed, `Err(RateLimitInfo)` if rate limited.
    pub async fn check(&self, identifier: &str) -> Result<RateLimitInfo, RateLimitInfo> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.check_at(identifier, now_ms, true).await
    }

    /// Like [`check`](Self::check) but without recording a request.
    pub async fn peek(&self, identifier: &str) -> Result<RateLimitInfo, RateLimitInfo> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.check_at(identifier, now_ms, false).await
    }

    async fn check_at(
        &self,
        identifier: &str,
        now_ms: i64,
        record: bool,
    ) -> Result<RateLimitInfo, RateLimitInfo> {
        let (allowed, count, retry_ms) = match &self.store {
            Store::Memory(windows) => self.check_memory(windows, identifier, now_ms, record),
            Store::Redis(conn) => match self.check_redis(conn, identifier, now_ms, record).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    // Fail open: a Redis outage must not take the API down.
                    tracing::error!("Rate limiter Redis error: {}", e);
                    (true, 0, 0)
                }
            },
        };

        let info = RateLimitInfo {
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(count),
            reset_at: (now_ms / 1000) + self.window_seconds as i64,
            retry_after: if allowed {
                0
            } else {
                ((retry_ms.max(0) as f64) / 1000.0).ceil().max(1.0) as u64
            },
        };

        if allowed {
            Ok(info)
        } else {
            Err(info)
        }
    }

    fn window_ms(&self) -> i64 {
        (self.window_seconds * 1000) as i64
    }

    fn check_memory(
        &self,
        windows: &MemoryWindows,
        identifier: &str,
        now_ms: i64,
        record: bool,
    ) -> (bool, u32, i64) {
        // Sweep before taking an entry guard; retain locks every shard.
        windows.sweep_expired(now_ms, self.window_ms());

        let window_start = now_ms - self.window_ms();
        if !record && !windows.windows.contains_key(identifier) {
            return (true, 0, 0);
        }
        let mut entries = windows.windows.entry(identifier.to_string()).or_default();

        while entries.front().is_some_and(|&ts| ts <= window_start) {
            entries.pop_front();
        }

        let count = entries.len() as u32;
        if count < self.max_requests {
            if !record {
                return (true, count, 0);
            }
            entries.push_back(now_ms);
            (true, count + 1, 0)
        } else {
            let retry_ms = entries
                .front()
                .map(|oldest| oldest + self.window_ms() - now_ms)
                .unwrap_or(0);
            (false, count, retry_ms)
        }
    }

    async fn check_redis(
        &self,
        conn: &ConnectionManager,
        identifier: &str,
        now_ms: i64,
        record: bool,
    ) -> Result<(bool, u32, i64), redis::RedisError> {
        let key = format!("{}:{}", KEY_PREFIX, identifier);
        let window_start = now_ms - self.window_ms();
        let mut conn = conn.clone();

        let script = redis::Script::new(
            r#"
            local key = KEYS[1]
            local now_ms = tonumber(ARGV[1])
            local window_start = tonumber(ARGV[2])
            local max_requests = tonumber(ARGV[3])
            local window_seconds = tonumber(ARGV[4])
            local record = tonumber(ARGV[5])

            redis.call('ZREMRANGEBYSCORE', key, '-inf', window_start)
            local current_count = redis.call('ZCARD', key)

            if current_count < max_requests then
                if record == 0 then
                    return {1, current_count, 0}
                end
                local member = now_ms .. ':' .. math.random(1000000)
                redis.call('ZADD', key, now_ms, member)
                redis.call('EXPIRE', key, window_seconds + 1)
                return {1, current_count + 1, 0}
            else
                local oldest = redis.call('ZRANGE', key, 0, 0, 'WITHSCORES')
                local retry_after = 0
                if oldest and #oldest >= 2 then
                    retry_after = oldest[2] + (window_seconds * 1000) - now_ms
                end
                return {0, current_count, retry_after}
            end
            "#,
        );

        let result: Vec<i64> = script
            .key(&key)
            .arg(now_ms)
            .arg(window_start)
            .arg(self.max_requests as i64)
            .arg(self.window_seconds as i64)
            .arg(i64::from(record))
            .invoke_async(&mut conn)
            .await?;

        let allowed = result.first().copied() == Some(1);
        let count = result.get(1).copied().unwrap_or(0) as u32;
        let retry_ms = result.get(2).copied().unwrap_or(0);
        Ok((allowed, count, retry_ms))
    }
}

// ============================================================================
// Identifier Extraction
// ============================================================================

/// Extract the rate limit identifier from a request.
///
/// Priority:
/// 1. Authenticated user ID
/// 2. X-Forwarded-For header (first hop)
/// 3. X-Real-IP header
/// 4. Peer address
fn extract_identifier(request: &Request, client_ip: Option<IpAddr>) -> String {
    if let Some(AuthUser(user)) = request.extensions().get::<AuthUser>() {
        return format!("user:{}", user.id);
    }

    // Note: This header can be spoofed if not behind a trusted proxy
    if let Some(forwarded_for) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded_for.split(',').next() {
            let ip = first_ip.trim();
            if ip.parse::<IpAddr>().is_ok() {
                return format!("ip:{}", ip);
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
    {
        if real_ip.parse::<IpAddr>().is_ok() {
            return format!("ip:{}", real_ip);
        }
    }

    match client_ip {
        Some(ip) => format!("ip:{}", ip),
        None => {
            tracing::warn!("Could not determine client identifier for rate limiting");
            "ip:unknown".to_string()
        }
    }
}

// ============================================================================
// Middleware Functions
// ============================================================================

/// Rate limiting middleware for the API routes.
pub async fn rate_limit_api(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip());
    let identifier = extract_identifier(&request, client_ip);

    match state.rate_limiter.check(&identifier).await {
        Ok(info) => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(response.headers_mut(), &info);
            response
        }
        Err(info) => {
            tracing::warn!(identifier = %identifier, "Rate limit exceeded");
            create_rate_limit_response(info)
        }
    }
}

/// Guard in front of authentication, keyed by client address.
///
/// Only rejected credentials (401) count against the window; once it is
/// full the address gets 429 without the token being verified.
pub async fn limit_auth_failures(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip());
    let identifier = format!(
        "{}:{}",
        AUTH_FAILURE_PREFIX,
        extract_identifier(&request, client_ip)
    );

    if let Err(info) = state.rate_limiter.peek(&identifier).await {
        tracing::warn!(identifier = %identifier, "Too many rejected credentials");
        return create_rate_limit_response(info);
    }

    let response = next.run(request).await;
    if response.status() == StatusCode::UNAUTHORIZED {
        let _ = state.rate_limiter.check(&identifier).await;
    }
    response
}

fn add_rate_limit_headers(headers: &mut header::HeaderMap, info: &RateLimitInfo) {
    if let Ok(v) = header::HeaderValue::from_str(&info.limit.to_string()) {
        headers.insert("X-RateLimit-Limit", v);
    }
    if let Ok(v) = header::HeaderValue::from_str(&info.remaining.to_string()) {
        headers.insert("X-RateLimit-Remaining", v);
    }
    if let Ok(v) = header::HeaderValue::from_str(&info.reset_at.to_string()) {
        headers.insert("X-RateLimit-Reset", v);
    }
}

/// Create a 429 Too Many Requests response.
fn create_rate_limit_response(info: RateLimitInfo) -> Response {
    let info = RateLimitInfo {
        remaining: 0,
        ..info
    };
    let body = RateLimitExceededResponse {
        error: ErrorResponse::new(
            10006,
            "Too many requests, please try again later.",
        ),
        rate_limit: info.clone(),
    };

    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    if let Ok(v) = header::HeaderValue::from_str(&info.retry_after.to_string()) {
        response.headers_mut().insert(header::RETRY_AFTER, v);
    }
    add_rate_limit_headers(response.headers_mut(), &info);

    response
}
