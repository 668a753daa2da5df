//! Metrics for cache health.
//!
//! Remote failures are absorbed as misses, so these counters are the only
//! signal that the shared backend is degraded.

use metrics::{counter, describe_counter};

/// Metric names for the cache layer.
pub mod names {
    /// Total cache lookups, labelled by backend, kind and outcome.
    pub const CACHE_LOOKUPS_TOTAL: &str = "stockapi_cache_lookups_total";
    /// Total shared-backend operations that failed.
    pub const CACHE_REMOTE_ERRORS_TOTAL: &str = "stockapi_cache_remote_errors_total";
    /// Total cache writes that failed after a successful load.
    pub const CACHE_WRITE_FAILURES_TOTAL: &str = "stockapi_cache_write_failures_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_LOOKUPS_TOTAL,
        "Total number of cache lookups by outcome"
    );
    describe_counter!(
        names::CACHE_REMOTE_ERRORS_TOTAL,
        "Total number of failed shared cache operations"
    );
    describe_counter!(
        names::CACHE_WRITE_FAILURES_TOTAL,
        "Total number of cache writes that failed"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a lookup and whether it hit.
    pub fn lookup(backend: &'static str, entry: &'static str, hit: bool) {
        counter!(
            names::CACHE_LOOKUPS_TOTAL,
            "backend" => backend,
            "entry" => entry,
            "outcome" => if hit { "hit" } else { "miss" }
        )
        .increment(1);
    }

    /// Record a failed shared-backend operation.
    pub fn remote_error(op: &'static str, reason: &'static str) {
        counter!(
            names::CACHE_REMOTE_ERRORS_TOTAL,
            "op" => op,
            "reason" => reason
        )
        .increment(1);
    }

    /// Record a cache write that failed.
    pub fn write_failure(backend: &'static str, entry: &'static str) {
        counter!(
            names::CACHE_WRITE_FAILURES_TOTAL,
            "backend" => backend,
            "entry" => entry
        )
        .increment(1);
    }
}
