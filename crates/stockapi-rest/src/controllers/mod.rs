//! REST API controllers.

pub mod health_controller;
pub mod stock_controller;

pub use health_controller::*;
