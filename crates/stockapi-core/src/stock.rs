//! Stock price record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ticker_eq;

/// One dated price record for a ticker.
///
/// Prices are exact decimals. They are written as JSON strings and read from
/// either JSON strings or numbers, so a value such as `202.30` survives every
/// encoding unchanged, scale included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StockRecord {
    /// Ticker symbol.
    #[serde(alias = "Ticker")]
    pub ticker: String,

    /// Trading date.
    #[serde(alias = "Date", with = "date_format")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date, example = "2025-05-09"))]
    pub date: NaiveDate,

    /// Opening price.
    #[serde(alias = "Open", with = "decimal_format")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "198.15"))]
    pub open: Decimal,

    /// Closing price.
    #[serde(alias = "Close", with = "decimal_format")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "202.30"))]
    pub close: Decimal,

    /// Highest price of the day.
    #[serde(alias = "High", with = "decimal_format")]
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub high: Decimal,

    /// Lowest price of the day.
    #[serde(alias = "Low", with = "decimal_format")]
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub low: Decimal,

    /// Traded volume.
    #[serde(alias = "Volume")]
    pub volume: i64,
}

impl StockRecord {
    /// Checks whether this record belongs to the given ticker, ignoring case.
    #[must_use]
    pub fn matches_ticker(&self, ticker: &str) -> bool {
        ticker_eq(&self.ticker, ticker)
    }
}

/// Decimals are written as strings and read from strings or numbers.
///
/// Numbers are taken from their literal JSON text, never through `f64`.
mod decimal_format {
    use rust_decimal::Decimal;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            other => return Err(D::Error::custom(format!("expected a decimal, found {}", other))),
        };
        let raw = raw.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(D::Error::custom)
    }
}

/// Dates are written as `YYYY-MM-DD`.
///
/// Reading also accepts a full `YYYY-MM-DDTHH:MM:SS` timestamp, keeping the date part.
mod date_format {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| raw.parse::<chrono::DateTime<chrono::Utc>>().map(|dt| dt.date_naive()))
            .map_err(serde::de::Error::custom)
    }
}
