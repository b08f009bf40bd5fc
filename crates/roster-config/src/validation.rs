//! Configuration validation module.
//!
//! Validates configuration values at startup, failing fast on invalid
//! configuration rather than at runtime.

use crate::AppConfig;
use std::fmt;
use url::Url;

const MAX_POOL_SIZE: u32 = 100;
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// Database URL format is invalid.
    InvalidDatabaseUrl { message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {} (must be 1-65535)", value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min_connections ({}) exceeds max_connections ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(
                    f,
                    "Pool size too large: {} (maximum {})",
                    value, maximum
                )
            }
            Self::InvalidDatabaseUrl { message } => {
                write!(f, "Invalid database URL: {}", message)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout {} must be positive, got {}", name, value)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: {} (expected one of trace, debug, info, warn, error)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validates the full configuration, returning the first violation found.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigValidationError> {
    if config.server.port == 0 {
        return Err(ConfigValidationError::InvalidPort {
            value: config.server.port,
        });
    }

    if config.server.request_timeout_secs == 0 {
        return Err(ConfigValidationError::NonPositiveTimeout {
            name: "server.request_timeout_secs".to_string(),
            value: config.server.request_timeout_secs,
        });
    }

    let db = &config.database;
    if db.min_connections > db.max_connections {
        return Err(ConfigValidationError::InvalidPoolSize {
            min: db.min_connections,
            max: db.max_connections,
        });
    }
    if db.max_connections > MAX_POOL_SIZE {
        return Err(ConfigValidationError::PoolSizeTooLarge {
            value: db.max_connections,
            maximum: MAX_POOL_SIZE,
        });
    }
    if db.connect_timeout_secs == 0 {
        return Err(ConfigValidationError::NonPositiveTimeout {
            name: "database.connect_timeout_secs".to_string(),
            value: db.connect_timeout_secs,
        });
    }

    if !db.url.is_empty() {
        Url::parse(&db.url).map_err(|e| ConfigValidationError::InvalidDatabaseUrl {
            message: e.to_string(),
        })?;
    }

    if !VALID_LOG_LEVELS.contains(&config.log.level.as_str()) {
        return Err(ConfigValidationError::InvalidLogLevel {
            value: config.log.level.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert_eq!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidPort { value: 0 })
        );
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let mut config = AppConfig::default();
        config.database.min_connections = 20;
        config.database.max_connections = 5;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidPoolSize { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_pool() {
        let mut config = AppConfig::default();
        config.database.max_connections = 500;
        config.database.min_connections = 1;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::PoolSizeTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "not a url".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidDatabaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "verbose".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.database.connect_timeout_secs = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::NonPositiveTimeout { .. })
        ));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = ConfigValidationError::InvalidPort { value: 0 };
        assert!(err.to_string().contains("port"));

        let err = ConfigValidationError::InvalidLogLevel {
            value: "verbose".to_string(),
        };
        assert!(err.to_string().contains("verbose"));
    }
}
