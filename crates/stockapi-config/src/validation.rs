//! Configuration validation module.
//!
//! Provides validation for all configuration values,
//! failing fast on invalid configuration rather than at runtime.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid.
    InvalidPoolSize { value: usize, maximum: usize },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or TTL value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// A required value is empty.
    EmptyValue { name: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { value, maximum } => {
                write!(f, "Invalid pool size: {} (must be between 1 and {})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::EmptyValue { name } => write!(f, "'{}' must not be empty", name),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: usize = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(config, &mut errors);
        Self::validate_cache(config, &mut errors);
        Self::validate_data_source(config, &mut errors);
        Self::validate_observability(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.server.port,
            });
        }

        if config.server.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    /// Validates cache settings. Redis settings only matter when the shared backend is selected.
    fn validate_cache(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let cache = &config.cache;

        for (name, value) in [
            ("cache.stock_ttl_secs", cache.stock_ttl_secs),
            ("cache.probe_ttl_secs", cache.probe_ttl_secs),
            ("cache.operation_timeout_ms", cache.operation_timeout_ms),
        ] {
            if value == 0 {
                errors.push(ConfigValidationError::NonPositiveTimeout {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if cache.probe_key.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyValue {
                name: "cache.probe_key".to_string(),
            });
        }

        if !cache.kind.is_shared() {
            return;
        }

        let redis = &config.redis;
        if redis.url.trim().is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !redis.url.starts_with("redis://") && !redis.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        } else if let Err(e) = Url::parse(&redis.url) {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: e.to_string(),
            });
        }

        if redis.pool_size == 0 || redis.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::InvalidPoolSize {
                value: redis.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if redis.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "redis.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_data_source(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.data_source.path.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyValue {
                name: "data_source.path".to_string(),
            });
        }
    }

    /// Accepts a bare level or filter directives such as `info,stockapi=debug`.
    fn validate_observability(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let filter = config.observability.log_level.to_lowercase();
        let valid = !filter.trim().is_empty()
            && filter.split(',').all(|directive| {
                let level = directive.rsplit('=').next().unwrap_or_default().trim();
                Self::VALID_LOG_LEVELS.contains(&level)
            });

        if !valid {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
