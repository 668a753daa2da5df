//! Application state for Axum handlers.

use stockapi_service::StockService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub stock_service: Arc<dyn StockService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(stock_service: Arc<dyn StockService>) -> Self {
        Self { stock_service }
    }

    /// Name of the committed cache backend.
    pub fn cache_backend(&self) -> &'static str {
        self.stock_service.cache_backend()
    }
}
