//! Redis Module
//!
//! Redis connection management. Redis is optional; when configured it
//! backs the distributed rate limiter so limits hold across instances.

use redis::aio::ConnectionManager;
use redis::Client;
use tracing::info;

/// Connect to Redis with automatic reconnection.
pub async fn create_redis_client(url: &str) -> Result<ConnectionManager, redis::RedisError> {
    info!("Connecting to Redis...");
    let client = Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;
    info!("Redis connection established");
    Ok(manager)
}

/// Round-trip a PING, used by readiness checks.
pub async fn ping(conn: &ConnectionManager) -> Result<(), redis::RedisError> {
    let mut conn = conn.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(())
}
