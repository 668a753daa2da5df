//! # StockApi Config
//!
//! Configuration management for the StockApi service.
//! Supports layered configuration from files and environment variables,
//! read once at startup.

mod app_config;
mod cache_settings;
mod loader;
mod validation;

pub use app_config::*;
pub use cache_settings::*;
pub use loader::*;
pub use validation::*;
