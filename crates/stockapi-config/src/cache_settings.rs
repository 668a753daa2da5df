//! Cache backend selection settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Cache backend kind.
///
/// Parsed case-insensitively. `redis`, `shared` and `shared-remote` select the
/// shared backend; every other value selects the process-local one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CacheKind {
    /// Process-local in-memory store.
    #[default]
    Memory,
    /// Shared Redis store.
    Shared,
}

impl CacheKind {
    /// Parses a configuration value. Never fails: unknown values mean `Memory`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" | "shared" | "shared-remote" | "shared_remote" => Self::Shared,
            _ => Self::Memory,
        }
    }

    /// Returns true if the shared backend is selected.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::Shared)
    }
}

impl From<String> for CacheKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CacheKind> for String {
    fn from(kind: CacheKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Shared => write!(f, "redis"),
        }
    }
}

/// Cache settings, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Backend to commit to.
    pub kind: CacheKind,
    /// Time-to-live for entries written to the shared backend, in seconds.
    pub stock_ttl_secs: u64,
    /// Key written by the startup liveness probe.
    pub probe_key: String,
    /// Time-to-live of the probe key, in seconds.
    pub probe_ttl_secs: u64,
    /// Upper bound for a single shared-backend operation, in milliseconds.
    pub operation_timeout_ms: u64,
    /// Prefix prepended to every shared-backend key.
    pub key_prefix: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            kind: CacheKind::Memory,
            stock_ttl_secs: 600, // 10 minutes
            probe_key: "ping:test".to_string(),
            probe_ttl_secs: 5,
            operation_timeout_ms: 500,
            key_prefix: String::new(),
        }
    }
}

impl CacheSettings {
    /// Settings that select the shared backend with default tuning.
    #[must_use]
    pub fn shared() -> Self {
        Self {
            kind: CacheKind::Shared,
            ..Self::default()
        }
    }

    /// Returns the entry TTL as a Duration.
    #[must_use]
    pub const fn stock_ttl(&self) -> Duration {
        Duration::from_secs(self.stock_ttl_secs)
    }

    /// Returns the probe TTL as a Duration.
    #[must_use]
    pub const fn probe_ttl(&self) -> Duration {
        Duration::from_secs(self.probe_ttl_secs)
    }

    /// Returns the per-operation timeout as a Duration.
    #[must_use]
    pub const fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}
