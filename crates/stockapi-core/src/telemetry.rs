//! Tracing subscriber initialization.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::StockApiResult;
use serde::{Deserialize, Serialize};

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Whether to enable console output.
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_log_level() -> String {
    "info,stockapi=debug,tower_http=debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            console_output: default_console_output(),
        }
    }
}

impl TelemetryConfig {
    /// Whether the JSON formatter is selected.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns an error if a global subscriber is already installed.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> StockApiResult<()> {
    if !config.console_output {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| crate::StockApiError::Internal(format!("Failed to initialize tracing: {}", e)))?;

    tracing::info!(
        log_level = %config.log_level,
        log_format = %config.log_format,
        "Telemetry initialized"
    );

    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> StockApiResult<()> {
    Ok(())
}
