//! Caching infrastructure for the service layer.
//!
//! Two interchangeable backends sit behind [`StockCache`]: a process-local
//! map and a shared Redis store. [`CacheSelector`] commits to exactly one of
//! them at startup.

pub mod cache_keys;
pub mod cache_metrics;
mod committed;
mod memory_cache;
mod redis_store;
pub(crate) mod remote_store;
mod selector;
mod shared_cache;
mod stock_cache;

pub use cache_keys::CacheKeys;
pub use cache_metrics::{register_metrics, CacheMetrics};
pub use committed::CommittedCache;
pub use memory_cache::InMemoryStockCache;
pub use redis_store::{create_redis_pool, RedisRemoteStore, DEFAULT_OPERATION_TIMEOUT};
pub use remote_store::RemoteStore;
pub use selector::CacheSelector;
pub use shared_cache::SharedStockCache;
pub use stock_cache::StockCache;
