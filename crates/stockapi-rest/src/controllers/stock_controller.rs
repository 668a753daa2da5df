//! Stock controller.

use crate::{
    extractors::ApiQuery,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use stockapi_core::StockRecord;
use stockapi_service::{BuyingOptionQuery, BuyingOptionResponse};
use tracing::debug;

/// Creates the stock router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tickers", get(get_all_tickers))
        .route("/:ticker", get(get_stock))
        .route("/:ticker/buy", get(get_buying_option))
}

/// List every known ticker.
#[utoipa::path(
    get,
    path = "/api/stock/tickers",
    tag = "stock",
    responses(
        (status = 200, description = "Distinct tickers, uppercase", body = Vec<String>)
    )
)]
pub async fn get_all_tickers(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    debug!("Get all tickers request");

    let tickers = state.stock_service.get_all_tickers().await?;
    ok(tickers)
}

/// Get the latest record for a ticker.
#[utoipa::path(
    get,
    path = "/api/stock/{ticker}",
    tag = "stock",
    params(
        ("ticker" = String, Path, description = "Ticker symbol, case-insensitive", example = "AAPL")
    ),
    responses(
        (status = 200, description = "Latest stock record", body = StockRecord),
        (status = 404, description = "Ticker not found", body = stockapi_core::ErrorResponse)
    )
)]
pub async fn get_stock(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> ApiResult<StockRecord> {
    debug!("Get stock request: {}", ticker);

    let stock = state.stock_service.get_stock(&ticker).await?;
    ok(stock)
}

/// Compute how many whole shares a budget buys.
#[utoipa::path(
    get,
    path = "/api/stock/{ticker}/buy",
    tag = "stock",
    params(
        ("ticker" = String, Path, description = "Ticker symbol, case-insensitive", example = "AAPL"),
        BuyingOptionQuery
    ),
    responses(
        (status = 200, description = "Buying option", body = BuyingOptionResponse),
        (status = 400, description = "Budget is missing or not positive", body = stockapi_core::ErrorResponse),
        (status = 404, description = "Ticker not found", body = stockapi_core::ErrorResponse)
    )
)]
pub async fn get_buying_option(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    ApiQuery(query): ApiQuery<BuyingOptionQuery>,
) -> ApiResult<BuyingOptionResponse> {
    debug!("Buying option request: {} with budget {}", ticker, query.budget);

    let option = state
        .stock_service
        .get_buying_option(&ticker, query.budget)
        .await?;
    ok(option)
}
