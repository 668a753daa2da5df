//! Stock service trait definition.

use crate::dto::BuyingOptionResponse;
use async_trait::async_trait;
use rust_decimal::Decimal;
use stockapi_core::{StockApiResult, StockRecord};

/// Stock service trait.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Lists every distinct ticker, uppercase, in first-seen order.
    async fn get_all_tickers(&self) -> StockApiResult<Vec<String>>;

    /// Gets the latest record for a ticker.
    async fn get_stock(&self, ticker: &str) -> StockApiResult<StockRecord>;

    /// Computes how many whole shares `budget` buys at the latest close.
    async fn get_buying_option(
        &self,
        ticker: &str,
        budget: Decimal,
    ) -> StockApiResult<BuyingOptionResponse>;

    /// Name of the cache backend in use.
    fn cache_backend(&self) -> &'static str;
}
