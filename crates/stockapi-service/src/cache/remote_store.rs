//! Transport seam over the shared key/value store.

use async_trait::async_trait;
use std::time::Duration;
use stockapi_core::StockApiResult;

/// Raw string operations against a remote key/value store.
///
/// Values are opaque JSON strings. Every call is expected to be bounded in
/// time by the implementation; a hung store surfaces as an error.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Get a raw value.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> StockApiResult<Option<String>>;

    /// Set a raw value with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StockApiResult<()>;
}
