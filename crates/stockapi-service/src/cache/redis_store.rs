//! Redis-backed remote store.

use super::RemoteStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, Runtime};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use stockapi_config::RedisConfig;
use stockapi_core::{StockApiError, StockApiResult};
use tracing::{debug, info};

/// Default bound for a single Redis operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(500);

/// Creates a Redis connection pool.
///
/// No connection is opened here; the first command does that.
pub fn create_redis_pool(config: &RedisConfig) -> StockApiResult<Pool> {
    info!("Creating Redis connection pool: {}", config.url);

    let pool = deadpool_redis::Config::from_url(&config.url)
        .builder()
        .map_err(|e| StockApiError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .wait_timeout(Some(config.connect_timeout()))
        .create_timeout(Some(config.connect_timeout()))
        .recycle_timeout(Some(config.connect_timeout()))
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| StockApiError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    Ok(pool)
}

/// Remote store speaking GET / SET EX to Redis.
pub struct RedisRemoteStore {
    pool: Arc<Pool>,
    operation_timeout: Duration,
}

impl RedisRemoteStore {
    /// Create a new Redis store.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Create a store with a custom per-operation timeout.
    #[must_use]
    pub fn with_timeout(pool: Arc<Pool>, operation_timeout: Duration) -> Self {
        Self {
            pool,
            operation_timeout,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> StockApiResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| StockApiError::Cache(format!("Failed to get Redis connection: {}", e)))
    }

    /// Runs `op` under the per-operation timeout.
    async fn bounded<T, Fut>(&self, key: &str, op: Fut) -> StockApiResult<T>
    where
        Fut: Future<Output = StockApiResult<T>>,
    {
        tokio::time::timeout(self.operation_timeout, op)
            .await
            .map_err(|_| {
                StockApiError::Timeout(format!(
                    "Redis operation on '{}' exceeded {:?}",
                    key, self.operation_timeout
                ))
            })?
    }
}

#[async_trait]
impl RemoteStore for RedisRemoteStore {
    async fn get_raw(&self, key: &str) -> StockApiResult<Option<String>> {
        let value: Option<String> = self
            .bounded(key, async {
                let mut conn = self.get_conn().await?;
                conn.get::<_, Option<String>>(key).await.map_err(|e| {
                    StockApiError::Cache(format!("Failed to get key '{}': {}", key, e))
                })
            })
            .await?;

        match &value {
            Some(_) => debug!("Redis hit for key '{}'", key),
            None => debug!("Redis miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StockApiResult<()> {
        let ttl_secs = ttl.as_secs().max(1);

        self.bounded(key, async {
            let mut conn = self.get_conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs)
                .await
                .map_err(|e| StockApiError::Cache(format!("Failed to set key '{}': {}", key, e)))
        })
        .await?;

        debug!("Stored key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}
