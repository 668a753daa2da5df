//! Read-through stock service.

use crate::cache::{CacheMetrics, StockCache};
use crate::dto::BuyingOptionResponse;
use crate::stock_service::StockService;
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use stockapi_core::{dedup_tickers, normalize_ticker, StockApiError, StockApiResult, StockRecord};
use stockapi_repository::StockDataSource;
use tracing::{debug, info, warn};

/// Stock service that consults the cache first and the data source on a miss.
///
/// Loaded values are written back to the cache. A failed write is logged and
/// the loaded value is still returned.
pub struct StockServiceImpl {
    data_source: Arc<dyn StockDataSource>,
    cache: Arc<dyn StockCache>,
}

impl StockServiceImpl {
    /// Creates a new stock service.
    pub fn new(data_source: Arc<dyn StockDataSource>, cache: Arc<dyn StockCache>) -> Self {
        Self { data_source, cache }
    }

    /// Reads every record from the data source off the async executor.
    async fn load_all(&self) -> StockApiResult<Vec<StockRecord>> {
        let source = Arc::clone(&self.data_source);
        tokio::task::spawn_blocking(move || source.get_all())
            .await
            .map_err(|e| StockApiError::internal(format!("Data source load aborted: {}", e)))
    }

    /// Returns the latest record for `ticker`, loading and caching it on a miss.
    async fn find_latest(&self, ticker: &str) -> StockApiResult<Option<StockRecord>> {
        let backend = self.cache.backend_name();

        if let Some(record) = self.cache.get_stock(ticker).await {
            CacheMetrics::lookup(backend, "stock", true);
            return Ok(Some(record));
        }
        CacheMetrics::lookup(backend, "stock", false);

        let records = self.load_all().await?;
        let Some(record) = records
            .into_iter()
            .filter(|r| r.matches_ticker(ticker))
            .max_by_key(|r| r.date)
        else {
            debug!("No records for ticker '{}'", ticker);
            return Ok(None);
        };

        if let Err(e) = self.cache.set_stock(ticker, &record).await {
            warn!(ticker, backend, error = %e, "Failed to cache stock record");
            CacheMetrics::write_failure(backend, "stock");
        }

        Ok(Some(record))
    }
}

#[async_trait]
impl StockService for StockServiceImpl {
    async fn get_all_tickers(&self) -> StockApiResult<Vec<String>> {
        let backend = self.cache.backend_name();

        if let Some(tickers) = self.cache.get_all_tickers().await {
            CacheMetrics::lookup(backend, "tickers", true);
            return Ok(tickers);
        }
        CacheMetrics::lookup(backend, "tickers", false);

        let records = self.load_all().await?;
        let tickers = dedup_tickers(records.iter().map(|r| r.ticker.as_str()));

        // An empty data set is not cached, so a missing file is retried on the next call.
        if tickers.is_empty() {
            debug!("Data source returned no tickers");
            return Ok(tickers);
        }

        if let Err(e) = self.cache.set_all_tickers(&tickers).await {
            warn!(backend, error = %e, "Failed to cache ticker index");
            CacheMetrics::write_failure(backend, "tickers");
        }

        info!("Loaded {} tickers from data source", tickers.len());
        Ok(tickers)
    }

    async fn get_stock(&self, ticker: &str) -> StockApiResult<StockRecord> {
        debug!("Getting stock: {}", ticker);

        self.find_latest(ticker)
            .await?
            .ok_or_else(|| StockApiError::ticker_not_found(ticker))
    }

    async fn get_buying_option(
        &self,
        ticker: &str,
        budget: Decimal,
    ) -> StockApiResult<BuyingOptionResponse> {
        debug!("Getting buying option: {} with budget {}", ticker, budget);

        if budget <= Decimal::ZERO {
            return Err(StockApiError::validation("Budget must be greater than zero."));
        }

        let stock = self.get_stock(ticker).await?;

        if stock.close <= Decimal::ZERO {
            return Err(StockApiError::validation(format!(
                "Close price for '{}' must be greater than zero.",
                normalize_ticker(ticker)
            )));
        }

        let shares = budget
            .checked_div(stock.close)
            .map(|quotient| quotient.floor())
            .and_then(|whole| whole.to_u64())
            .ok_or_else(|| StockApiError::validation("Budget is too large."))?;

        Ok(BuyingOptionResponse {
            ticker: stock.ticker,
            budget,
            shares,
        })
    }

    fn cache_backend(&self) -> &'static str {
        self.cache.backend_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::remote_store::testing::FakeRemoteStore;
    use crate::cache::{CacheSelector, RemoteStore};
    use crate::fixtures;
    use stockapi_config::CacheSettings;
    use stockapi_repository::InMemoryStockDataSource;

    async fn memory_service(
        records: Vec<StockRecord>,
    ) -> (StockServiceImpl, Arc<InMemoryStockDataSource>) {
        let source = Arc::new(InMemoryStockDataSource::new(records));
        let cache = CacheSelector::select(&CacheSettings::default(), None)
            .await
            .unwrap();
        (StockServiceImpl::new(source.clone(), cache), source)
    }

    async fn shared_service(
        records: Vec<StockRecord>,
        store: &Arc<FakeRemoteStore>,
    ) -> (StockServiceImpl, Arc<InMemoryStockDataSource>) {
        let source = Arc::new(InMemoryStockDataSource::new(records));
        let remote: Arc<dyn RemoteStore> = store.clone();
        let cache = CacheSelector::select(&CacheSettings::shared(), Some(remote))
            .await
            .unwrap();
        (StockServiceImpl::new(source.clone(), cache), source)
    }

    #[tokio::test]
    async fn test_buying_option_for_aapl() {
        let (service, _) = memory_service(fixtures::all()).await;

        let option = service
            .get_buying_option("AAPL", Decimal::new(1000, 0))
            .await
            .unwrap();

        assert_eq!(option.ticker, "AAPL");
        assert_eq!(option.budget, Decimal::new(1000, 0));
        assert_eq!(option.shares, 4);
    }

    #[tokio::test]
    async fn test_get_stock_returns_latest_record() {
        let (service, _) = memory_service(fixtures::all()).await;

        let stock = service.get_stock("AAPL").await.unwrap();

        assert_eq!(stock, fixtures::aapl());
        assert_eq!(stock.open.to_string(), "198.15");
        assert_eq!(stock.close.to_string(), "202.30");
    }

    #[tokio::test]
    async fn test_get_stock_is_case_insensitive() {
        let (service, source) = memory_service(fixtures::all()).await;

        let lower = service.get_stock("aapl").await.unwrap();
        let upper = service.get_stock("AAPL").await.unwrap();

        assert_eq!(lower, upper);
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_data_source() {
        let (service, source) = memory_service(fixtures::all()).await;

        service.get_stock("MSFT").await.unwrap();
        service.get_stock("MSFT").await.unwrap();
        service.get_buying_option("msft", Decimal::new(1000, 0)).await.unwrap();

        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_not_found() {
        let (service, _) = memory_service(fixtures::all()).await;

        let err = service.get_stock("ZZZZ").await.unwrap_err();

        assert!(matches!(err, StockApiError::NotFound { .. }));
        assert_eq!(err.to_string(), "Ticker 'ZZZZ' not found.");
    }

    #[tokio::test]
    async fn test_misses_are_not_cached() {
        let (service, source) = memory_service(fixtures::all()).await;

        assert!(service.get_stock("ZZZZ").await.is_err());
        assert!(service.get_stock("ZZZZ").await.is_err());

        assert_eq!(source.load_count(), 2);
    }

    #[tokio::test]
    async fn test_non_positive_budget_is_rejected() {
        let (service, source) = memory_service(fixtures::all()).await;

        for budget in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let err = service.get_buying_option("AAPL", budget).await.unwrap_err();
            assert!(matches!(err, StockApiError::Validation(_)));
            assert_eq!(err.to_string(), "Budget must be greater than zero.");
        }
        assert_eq!(source.load_count(), 0);
    }

    #[tokio::test]
    async fn test_budget_below_price_buys_nothing() {
        let (service, _) = memory_service(fixtures::all()).await;

        let option = service
            .get_buying_option("AAPL", Decimal::new(20229, 2))
            .await
            .unwrap();

        assert_eq!(option.shares, 0);
    }

    #[tokio::test]
    async fn test_zero_close_is_a_validation_error() {
        let mut record = fixtures::aapl();
        record.close = Decimal::ZERO;
        let (service, _) = memory_service(vec![record]).await;

        let err = service
            .get_buying_option("AAPL", Decimal::new(1000, 0))
            .await
            .unwrap_err();

        assert!(matches!(err, StockApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_buying_option_for_unknown_ticker() {
        let (service, _) = memory_service(fixtures::all()).await;

        let err = service
            .get_buying_option("ZZZZ", Decimal::new(1000, 0))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Ticker 'ZZZZ' not found.");
    }

    #[tokio::test]
    async fn test_tickers_are_distinct_and_cached() {
        let (service, source) = memory_service(fixtures::all()).await;

        let tickers = service.get_all_tickers().await.unwrap();
        assert_eq!(tickers, vec!["AAPL", "MSFT", "GOOGL"]);

        service.get_all_tickers().await.unwrap();
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_ticker_index_is_not_cached() {
        let (service, source) = memory_service(Vec::new()).await;

        assert!(service.get_all_tickers().await.unwrap().is_empty());
        assert!(service.get_all_tickers().await.unwrap().is_empty());
        assert_eq!(source.load_count(), 2);
    }

    #[tokio::test]
    async fn test_shared_cache_read_through() {
        let store = Arc::new(FakeRemoteStore::new());
        let (service, source) = shared_service(fixtures::all(), &store).await;

        let option = service
            .get_buying_option("aapl", Decimal::new(1000, 0))
            .await
            .unwrap();
        assert_eq!(option.shares, 4);
        assert!(store.value("stock:AAPL:details").is_some());

        service.get_stock("AAPL").await.unwrap();
        assert_eq!(source.load_count(), 1);
        assert_eq!(service.cache_backend(), "redis");
    }

    #[tokio::test]
    async fn test_shared_cache_is_visible_to_other_instances() {
        let store = Arc::new(FakeRemoteStore::new());
        let (first, _) = shared_service(fixtures::all(), &store).await;
        let (second, second_source) = shared_service(fixtures::all(), &store).await;

        first.get_stock("GOOGL").await.unwrap();
        let stock = second.get_stock("googl").await.unwrap();

        assert_eq!(stock, fixtures::googl());
        assert_eq!(second_source.load_count(), 0);
    }

    #[tokio::test]
    async fn test_read_failure_falls_back_to_data_source() {
        let store = Arc::new(FakeRemoteStore::new());
        let (service, source) = shared_service(fixtures::all(), &store).await;
        service.get_stock("AAPL").await.unwrap();

        store.fail_reads(true);
        let stock = service.get_stock("AAPL").await.unwrap();

        assert_eq!(stock, fixtures::aapl());
        assert_eq!(source.load_count(), 2);
    }

    #[tokio::test]
    async fn test_write_failure_still_returns_value() {
        let store = Arc::new(FakeRemoteStore::new());
        let (service, _) = shared_service(fixtures::all(), &store).await;

        store.fail_writes(true);
        let stock = service.get_stock("MSFT").await.unwrap();
        let tickers = service.get_all_tickers().await.unwrap();

        assert_eq!(stock, fixtures::msft());
        assert_eq!(tickers.len(), 3);
        assert!(store.value("stock:MSFT:details").is_none());
    }
}
