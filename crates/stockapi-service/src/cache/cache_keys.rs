//! Cache key generators for consistent key naming.

use stockapi_core::normalize_ticker;

/// Key builder for stock entries, optionally namespaced by a prefix.
///
/// Ticker segments are always normalized, so `aapl` and `AAPL` share a key.
#[derive(Debug, Clone, Default)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    /// Creates a key builder with the given prefix (may be empty).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key of the cached record for a ticker.
    #[must_use]
    pub fn stock_details(&self, ticker: &str) -> String {
        format!("{}stock:{}:details", self.prefix, normalize_ticker(ticker))
    }

    /// Key of the cached ticker index.
    #[must_use]
    pub fn all_tickers(&self) -> String {
        format!("{}stock:tickers", self.prefix)
    }

    /// Key written by the startup liveness probe.
    #[must_use]
    pub fn probe(&self, probe_key: &str) -> String {
        format!("{}{}", self.prefix, probe_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_details_key() {
        let keys = CacheKeys::default();
        assert_eq!(keys.stock_details("AAPL"), "stock:AAPL:details");
        assert_eq!(keys.stock_details(" aapl "), "stock:AAPL:details");
    }

    #[test]
    fn test_all_tickers_key() {
        assert_eq!(CacheKeys::default().all_tickers(), "stock:tickers");
    }

    #[test]
    fn test_prefixed_keys() {
        let keys = CacheKeys::new("stockapi:");
        assert_eq!(keys.stock_details("msft"), "stockapi:stock:MSFT:details");
        assert_eq!(keys.all_tickers(), "stockapi:stock:tickers");
        assert_eq!(keys.probe("ping:test"), "stockapi:ping:test");
    }
}
