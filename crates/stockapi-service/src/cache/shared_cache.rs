//! Stock cache on top of a shared remote store.

use super::{CacheKeys, CacheMetrics, RemoteStore, StockCache};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use stockapi_config::CacheSettings;
use stockapi_core::{dedup_tickers, StockApiResult, StockRecord};
use tracing::{debug, warn};

/// Stock cache stored as JSON in a remote store, with a TTL on every entry.
///
/// A failed or undecodable read is logged, counted and reported as a miss.
pub struct SharedStockCache {
    remote: Arc<dyn RemoteStore>,
    keys: CacheKeys,
    ttl: Duration,
}

impl SharedStockCache {
    pub(crate) fn new(remote: Arc<dyn RemoteStore>, settings: &CacheSettings) -> Self {
        Self {
            remote,
            keys: CacheKeys::new(settings.key_prefix.clone()),
            ttl: settings.stock_ttl(),
        }
    }

    /// Entry TTL used for every write.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn read<T: DeserializeOwned>(&self, op: &'static str, key: &str) -> Option<T> {
        let json = match self.remote.get_raw(key).await {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                warn!(op, key, error = %e, "Shared cache read failed, treating as miss");
                CacheMetrics::remote_error(op, "backend");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(op, key, error = %e, "Shared cache entry is not valid JSON, treating as miss");
                CacheMetrics::remote_error(op, "decode");
                None
            }
        }
    }

    async fn write(&self, op: &'static str, key: &str, json: &str) -> StockApiResult<()> {
        if let Err(e) = self.remote.set_raw(key, json, self.ttl).await {
            CacheMetrics::remote_error(op, "backend");
            return Err(e);
        }
        debug!(op, key, "Shared cache entry written");
        Ok(())
    }
}

#[async_trait]
impl StockCache for SharedStockCache {
    async fn get_stock(&self, ticker: &str) -> Option<StockRecord> {
        let key = self.keys.stock_details(ticker);
        self.read("get_stock", &key).await
    }

    async fn set_stock(&self, ticker: &str, record: &StockRecord) -> StockApiResult<()> {
        let key = self.keys.stock_details(ticker);
        let json = serde_json::to_string(record)?;
        self.write("set_stock", &key, &json).await
    }

    async fn get_all_tickers(&self) -> Option<Vec<String>> {
        let key = self.keys.all_tickers();
        self.read("get_all_tickers", &key).await
    }

    async fn set_all_tickers(&self, tickers: &[String]) -> StockApiResult<()> {
        let key = self.keys.all_tickers();
        let json = serde_json::to_string(&dedup_tickers(tickers))?;
        self.write("set_all_tickers", &key, &json).await
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::remote_store::testing::FakeRemoteStore;
    use crate::fixtures::aapl;

    fn shared(store: &Arc<FakeRemoteStore>) -> SharedStockCache {
        SharedStockCache::new(store.clone(), &CacheSettings::shared())
    }

    #[tokio::test]
    async fn test_record_round_trips_exactly() {
        let store = Arc::new(FakeRemoteStore::new());
        let cache = shared(&store);

        cache.set_stock("aapl", &aapl()).await.unwrap();
        let cached = cache.get_stock("AAPL").await.unwrap();

        assert_eq!(cached, aapl());
        assert_eq!(cached.open.to_string(), "198.15");
        assert_eq!(cached.close.to_string(), "202.30");
    }

    #[tokio::test]
    async fn test_entries_use_normalized_keys_and_ttl() {
        let store = Arc::new(FakeRemoteStore::new());
        let cache = shared(&store);

        cache.set_stock("aapl", &aapl()).await.unwrap();
        cache
            .set_all_tickers(&["aapl".to_string(), "AAPL".to_string()])
            .await
            .unwrap();

        assert_eq!(store.keys(), vec!["stock:AAPL:details", "stock:tickers"]);
        assert_eq!(store.ttl("stock:AAPL:details"), Some(Duration::from_secs(600)));
        assert_eq!(store.value("stock:tickers").as_deref(), Some(r#"["AAPL"]"#));
    }

    #[tokio::test]
    async fn test_prefix_is_applied() {
        let store = Arc::new(FakeRemoteStore::new());
        let settings = CacheSettings {
            key_prefix: "stockapi:".to_string(),
            ..CacheSettings::shared()
        };
        let cache = SharedStockCache::new(store.clone(), &settings);

        cache.set_stock("msft", &aapl()).await.unwrap();
        assert_eq!(store.keys(), vec!["stockapi:stock:MSFT:details"]);
    }

    #[tokio::test]
    async fn test_read_failure_is_a_miss() {
        let store = Arc::new(FakeRemoteStore::new());
        let cache = shared(&store);
        cache.set_stock("AAPL", &aapl()).await.unwrap();

        store.fail_reads(true);
        assert_eq!(cache.get_stock("AAPL").await, None);
        assert_eq!(cache.get_all_tickers().await, None);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let store = Arc::new(FakeRemoteStore::new());
        store.insert("stock:AAPL:details", "{ not json");
        let cache = shared(&store);

        assert_eq!(cache.get_stock("AAPL").await, None);
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let store = Arc::new(FakeRemoteStore::new());
        store.fail_writes(true);
        let cache = shared(&store);

        assert!(cache.set_stock("AAPL", &aapl()).await.is_err());
        assert!(cache.set_all_tickers(&["AAPL".to_string()]).await.is_err());
    }

    #[tokio::test]
    async fn test_reads_entries_written_by_another_instance() {
        let store = Arc::new(FakeRemoteStore::new());
        shared(&store).set_stock("AAPL", &aapl()).await.unwrap();

        let other = shared(&store);
        assert_eq!(other.get_stock("aapl").await, Some(aapl()));
        assert_eq!(other.backend_name(), "redis");
    }
}
