//! Stock cache contract shared by both backends.

use async_trait::async_trait;
use stockapi_core::{StockApiResult, StockRecord};

/// Typed cache of stock records and the ticker index.
///
/// Reads never fail: any backend trouble is reported as a miss. Writes return
/// an error so the caller can log it, but a failed write must never fail the
/// request that triggered it.
#[async_trait]
pub trait StockCache: Send + Sync {
    /// Looks up the cached record for `ticker` (case-insensitive).
    async fn get_stock(&self, ticker: &str) -> Option<StockRecord>;

    /// Stores `record` under `ticker` (case-insensitive).
    async fn set_stock(&self, ticker: &str, record: &StockRecord) -> StockApiResult<()>;

    /// Looks up the cached ticker index.
    async fn get_all_tickers(&self) -> Option<Vec<String>>;

    /// Stores the ticker index. Entries are deduplicated case-insensitively.
    async fn set_all_tickers(&self, tickers: &[String]) -> StockApiResult<()>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
