//! Ticker symbol normalization.
//!
//! Ticker identity is case-insensitive; the canonical form is uppercase.

use std::collections::HashSet;

/// Returns the canonical (trimmed, uppercase) form of a ticker symbol.
#[must_use]
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

/// Case-insensitive ticker equality.
#[must_use]
pub fn ticker_eq(a: &str, b: &str) -> bool {
    normalize_ticker(a) == normalize_ticker(b)
}

/// De-duplicates tickers case-insensitively.
///
/// The result holds canonical symbols in first-seen order. Blank entries are dropped.
pub fn dedup_tickers<I, S>(tickers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tickers
        .into_iter()
        .map(|t| normalize_ticker(t.as_ref()))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
