//! Result type aliases for StockApi.

use crate::StockApiError;

/// A specialized `Result` type for StockApi operations.
pub type StockApiResult<T> = Result<T, StockApiError>;
