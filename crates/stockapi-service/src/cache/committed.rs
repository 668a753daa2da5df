//! The cache backend a process committed to at startup.

use super::{InMemoryStockCache, SharedStockCache, StockCache};
use async_trait::async_trait;
use stockapi_core::{StockApiResult, StockRecord};

/// The single cache backend chosen by [`CacheSelector`](super::CacheSelector).
///
/// Exactly one backend exists per process and it never changes afterwards.
/// The backend is private, so only the selector can build one:
///
/// ```compile_fail
/// use stockapi_service::{CommittedCache, InMemoryStockCache};
///
/// let cache = CommittedCache::Memory(InMemoryStockCache::default());
/// ```
///
/// ```compile_fail
/// use stockapi_service::InMemoryStockCache;
///
/// let cache = InMemoryStockCache::new();
/// ```
pub struct CommittedCache {
    backend: Backend,
}

enum Backend {
    /// Process-local, no expiry.
    Memory(InMemoryStockCache),
    /// Shared remote store, entries expire after the configured TTL.
    Shared(SharedStockCache),
}

impl CommittedCache {
    pub(super) fn memory(cache: InMemoryStockCache) -> Self {
        Self {
            backend: Backend::Memory(cache),
        }
    }

    pub(super) fn shared(cache: SharedStockCache) -> Self {
        Self {
            backend: Backend::Shared(cache),
        }
    }

    /// Returns `true` if the shared backend was committed.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self.backend, Backend::Shared(_))
    }

    fn inner(&self) -> &dyn StockCache {
        match &self.backend {
            Backend::Memory(cache) => cache,
            Backend::Shared(cache) => cache,
        }
    }
}

impl std::fmt::Debug for CommittedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CommittedCache")
            .field(&self.backend_name())
            .finish()
    }
}

#[async_trait]
impl StockCache for CommittedCache {
    async fn get_stock(&self, ticker: &str) -> Option<StockRecord> {
        self.inner().get_stock(ticker).await
    }

    async fn set_stock(&self, ticker: &str, record: &StockRecord) -> StockApiResult<()> {
        self.inner().set_stock(ticker, record).await
    }

    async fn get_all_tickers(&self) -> Option<Vec<String>> {
        self.inner().get_all_tickers().await
    }

    async fn set_all_tickers(&self, tickers: &[String]) -> StockApiResult<()> {
        self.inner().set_all_tickers(tickers).await
    }

    fn backend_name(&self) -> &'static str {
        self.inner().backend_name()
    }
}
