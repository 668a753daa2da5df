//! # StockApi Server Library
//!
//! Wiring and startup utilities for the StockApi server.
//!
//! [`app::App::build`] is the composition root: it creates the data source,
//! commits the cache backend once and hands the resulting service to the
//! router.

pub mod app;
pub mod startup;
