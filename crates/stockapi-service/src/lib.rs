//! # StockApi Service
//!
//! Stock lookups and buying options served through a read-through cache.
//!
//! ```text
//! StockServiceImpl
//!   ├── Arc<dyn StockCache>        committed once by CacheSelector
//!   │     ├── InMemoryStockCache
//!   │     └── SharedStockCache ── Arc<dyn RemoteStore> ── RedisRemoteStore
//!   └── Arc<dyn StockDataSource>   consulted only on a miss
//! ```

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod stock_service;

#[cfg(test)]
mod fixtures;

pub use cache::*;
pub use dto::*;
pub use r#impl::StockServiceImpl;
pub use stock_service::*;
