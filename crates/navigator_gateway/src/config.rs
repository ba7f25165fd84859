use std::env;
use std::time::Duration;

/// Gateway configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (default: 127.0.0.1)
    pub host: String,
    /// Listen port (default: 27124)
    pub port: u16,
    /// Deadline for a navigation settle wait (default: 1000ms)
    pub settle_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "27124".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let settle_timeout_ms: u64 = env::var("SETTLE_TIMEOUT_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidSettleTimeout)?;

        Ok(Config {
            host,
            port,
            settle_timeout: Duration::from_millis(settle_timeout_ms),
        })
    }

    /// Get the listen address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 27124,
            settle_timeout: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidSettleTimeout,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "Invalid PORT environment variable"),
            ConfigError::InvalidSettleTimeout => {
                write!(f, "Invalid SETTLE_TIMEOUT_MS environment variable")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_plugin_defaults() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:27124");
        assert_eq!(config.settle_timeout, Duration::from_millis(1000));
    }
}
