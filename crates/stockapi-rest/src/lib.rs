//! # StockApi REST
//!
//! REST API layer using Axum for the StockApi service.
//! Provides HTTP endpoints for stock lookups, buying options and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
