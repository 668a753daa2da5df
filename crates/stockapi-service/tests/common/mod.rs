//! Common test infrastructure for Redis integration tests.

use deadpool_redis::Pool;
use std::sync::Arc;
use stockapi_config::RedisConfig;
use stockapi_service::create_redis_pool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::Redis;

/// Test Redis container wrapper.
///
/// Manages a Redis testcontainer lifecycle and provides a connection pool.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    pool: Arc<Pool>,
}

impl TestRedis {
    /// Starts a fresh Redis container.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(6379)
            .await
            .expect("Failed to get Redis port");

        let config = RedisConfig {
            url: format!("redis://127.0.0.1:{}", port),
            pool_size: 4,
            connect_timeout_secs: 5,
        };
        let pool = create_redis_pool(&config).expect("Failed to create Redis pool");

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    /// Returns the connection pool.
    pub fn pool(&self) -> Arc<Pool> {
        Arc::clone(&self.pool)
    }
}
