//! Data Transfer Objects (DTOs).

mod stock_dto;

pub use stock_dto::*;
