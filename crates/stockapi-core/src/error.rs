//! Unified error type for all layers of the application.

use serde::Serialize;
use thiserror::Error;

/// Unified error type for StockApi.
///
/// `NotFound` and `Validation` reach HTTP callers as 4xx responses. Cache
/// failures are contained by the cache layer once the process is serving;
/// only startup lets them escape.
#[derive(Error, Debug)]
pub enum StockApiError {
    /// Resource not found
    #[error("{resource_type} '{id}' not found.")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Rejected input; the message is shown to the caller as is.
    #[error("{0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StockApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Timeout(_) => 503,
            Self::Configuration(_) | Self::Cache(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Not found error for a ticker symbol, keeping the caller's casing.
    #[must_use]
    pub fn ticker_not_found(ticker: &str) -> Self {
        Self::NotFound {
            resource_type: "Ticker",
            id: ticker.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for StockApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Error body returned to HTTP callers.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&StockApiError> for ErrorResponse {
    fn from(error: &StockApiError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}
