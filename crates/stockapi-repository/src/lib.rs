//! # StockApi Repository
//!
//! Data sources for stock records.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn StockDataSource>
//! FileStockDataSource       (JSON file, read per call)
//! InMemoryStockDataSource   (fixed records)
//! ```

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStockDataSource;
pub use memory::InMemoryStockDataSource;
pub use traits::*;
