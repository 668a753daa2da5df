//! Process-local stock cache.

use super::StockCache;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use stockapi_core::{dedup_tickers, normalize_ticker, StockApiResult, StockRecord};
use tracing::debug;

/// In-memory cache keyed by normalized ticker.
///
/// Entries never expire. Only one record is kept per ticker and one ticker
/// index per process, so memory stays bounded by the size of the data set.
#[derive(Debug)]
pub struct InMemoryStockCache {
    stocks: RwLock<HashMap<String, StockRecord>>,
    tickers: RwLock<Option<Vec<String>>>,
}

impl InMemoryStockCache {
    pub(crate) fn new() -> Self {
        Self {
            stocks: RwLock::new(HashMap::new()),
            tickers: RwLock::new(None),
        }
    }

    /// Number of cached records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.read().len()
    }

    /// Returns `true` if no record is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.read().is_empty()
    }
}

#[async_trait]
impl StockCache for InMemoryStockCache {
    async fn get_stock(&self, ticker: &str) -> Option<StockRecord> {
        let key = normalize_ticker(ticker);
        let record = self.stocks.read().get(&key).cloned();

        match &record {
            Some(_) => debug!("Memory hit for ticker '{}'", key),
            None => debug!("Memory miss for ticker '{}'", key),
        }
        record
    }

    async fn set_stock(&self, ticker: &str, record: &StockRecord) -> StockApiResult<()> {
        let key = normalize_ticker(ticker);
        self.stocks.write().insert(key, record.clone());
        Ok(())
    }

    async fn get_all_tickers(&self) -> Option<Vec<String>> {
        self.tickers.read().clone()
    }

    async fn set_all_tickers(&self, tickers: &[String]) -> StockApiResult<()> {
        *self.tickers.write() = Some(dedup_tickers(tickers));
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
