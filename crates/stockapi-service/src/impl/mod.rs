//! Stock service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `stock_service.rs`).

pub mod stock_service_impl;

pub use stock_service_impl::StockServiceImpl;
