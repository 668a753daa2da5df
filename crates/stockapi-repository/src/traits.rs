//! Data source trait definitions.

use stockapi_core::StockRecord;

/// Static provider of stock records.
///
/// Implementations own their error policy: failures are logged and surfaced
/// as an empty collection, never as an error.
pub trait StockDataSource: Send + Sync {
    /// Returns the full record collection.
    fn get_all(&self) -> Vec<StockRecord>;
}
