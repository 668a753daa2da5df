//! Fixed in-memory data source.

use crate::StockDataSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use stockapi_core::StockRecord;

/// Serves a fixed set of records and counts how often it was read.
#[derive(Debug, Default)]
pub struct InMemoryStockDataSource {
    records: Vec<StockRecord>,
    loads: AtomicUsize,
}

impl InMemoryStockDataSource {
    /// Creates a data source serving `records`.
    #[must_use]
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self {
            records,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of `get_all` calls served so far.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl StockDataSource for InMemoryStockDataSource {
    fn get_all(&self) -> Vec<StockRecord> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        self.records.clone()
    }
}
