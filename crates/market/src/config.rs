//! Market API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `MARKET_HOST` - Bind address (default: 127.0.0.1)
//! - `MARKET_PORT` - Listen port (default: 8080)
//! - `MARKET_SEED_CATALOG` - Load the sample catalog at startup (default: true)
//! - `MARKET_LOW_STOCK_THRESHOLD` - Threshold used when a low-stock query omits one (default: 5)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Market API configuration.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Whether to load the sample catalog at startup
    pub seed_catalog: bool,
    /// Default threshold for low-stock queries
    pub low_stock_threshold: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            seed_catalog: true,
            low_stock_threshold: 5,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl MarketConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value or a
    /// sample rate falls outside `0.0..=1.0`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let sentry_sample_rate = parse_or(
            &lookup,
            "SENTRY_SAMPLE_RATE",
            defaults.sentry_sample_rate,
        )?;
        validate_rate("SENTRY_SAMPLE_RATE", sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_or(
            &lookup,
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;
        validate_rate("SENTRY_TRACES_SAMPLE_RATE", sentry_traces_sample_rate)?;

        Ok(Self {
            host: parse_or(&lookup, "MARKET_HOST", defaults.host)?,
            port: parse_or(&lookup, "MARKET_PORT", defaults.port)?,
            seed_catalog: parse_flag(&lookup, "MARKET_SEED_CATALOG", defaults.seed_catalog)?,
            low_stock_threshold: parse_or(
                &lookup,
                "MARKET_LOW_STOCK_THRESHOLD",
                defaults.low_stock_threshold,
            )?,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when unset or blank.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup(key)) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse a boolean flag accepting `true/false`, `1/0`, `yes/no`, `on/off`.
fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = non_empty(lookup(key)) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

fn validate_rate(key: &str, rate: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
