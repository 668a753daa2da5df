//! # StockApi Core
//!
//! Core types and error definitions for the StockApi service.
//! This crate provides the stock record model, ticker normalization and the
//! unified error type shared by every other layer.

pub mod error;
pub mod result;
pub mod stock;
pub mod telemetry;
pub mod ticker;

pub use error::*;
pub use result::*;
pub use stock::*;
pub use telemetry::*;
pub use ticker::*;
