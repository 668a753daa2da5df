//! Stock-related DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of the buying option endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BuyingOptionQuery {
    /// Amount of money available, must be greater than zero.
    #[param(value_type = String, example = "1000")]
    pub budget: Decimal,
}

/// How many whole shares a budget buys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BuyingOptionResponse {
    /// Ticker symbol as stored in the data source.
    #[schema(example = "AAPL")]
    pub ticker: String,
    /// The budget that was asked about.
    #[schema(value_type = String, example = "1000")]
    pub budget: Decimal,
    /// Whole shares affordable at the latest close.
    #[schema(example = 4)]
    pub shares: u64,
}
