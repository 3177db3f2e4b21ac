//! API configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// API configuration
///
/// The base rate is read once at process start; changing it requires a
/// restart. There is no rate versioning.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Base rate all rating factors are applied to
    pub base_rate: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            database_url: "postgres://localhost/premium_rating".to_string(),
            log_level: "info".to_string(),
            base_rate: dec!(100.0),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 8082);
        assert_eq!(config.base_rate, dec!(100.0));
        assert_eq!(config.server_addr(), "0.0.0.0:8082");
    }
}
