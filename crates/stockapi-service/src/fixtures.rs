//! Sample records shared by the unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockapi_core::StockRecord;

fn record(ticker: &str, day: u32, open: i64, close: i64, volume: i64) -> StockRecord {
    StockRecord {
        ticker: ticker.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
        open: Decimal::new(open, 2),
        close: Decimal::new(close, 2),
        high: Decimal::new(close.max(open) + 120, 2),
        low: Decimal::new(close.min(open) - 25, 2),
        volume,
    }
}

/// AAPL on 2025-05-09: open 198.15, close 202.30.
pub fn aapl() -> StockRecord {
    record("AAPL", 9, 19815, 20230, 51_234_000)
}

/// AAPL one day earlier, closing lower.
pub fn aapl_previous_day() -> StockRecord {
    record("AAPL", 8, 19702, 19788, 48_002_100)
}

pub fn msft() -> StockRecord {
    record("MSFT", 9, 43110, 43873, 20_111_000)
}

pub fn googl() -> StockRecord {
    record("GOOGL", 9, 15402, 15277, 31_450_200)
}

/// The full sample data set, with AAPL listed twice.
pub fn all() -> Vec<StockRecord> {
    vec![aapl_previous_day(), msft(), aapl(), googl()]
}
