//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CHOUETTE_STATE_DIR` - Directory for persisted state files
//!   (default: `.chouette`)
//! - `CHOUETTE_WELCOME_DELAY_MS` - Delay before the chat welcome message
//!   (default: 500)
//! - `CHOUETTE_REPLY_DELAY_MIN_MS` - Lower bound for assistant reply delay,
//!   inclusive (default: 1000)
//! - `CHOUETTE_REPLY_DELAY_MAX_MS` - Upper bound for assistant reply delay,
//!   exclusive (default: 3000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_STATE_DIR: &str = ".chouette";
const DEFAULT_WELCOME_DELAY_MS: u64 = 500;
const DEFAULT_REPLY_DELAY_MIN_MS: u64 = 1000;
const DEFAULT_REPLY_DELAY_MAX_MS: u64 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Where persisted records live.
    pub state_dir: PathBuf,
    /// How long an empty chat page waits before the welcome message.
    pub welcome_delay: Duration,
    /// Lower bound of the assistant reply delay, inclusive.
    pub reply_delay_min: Duration,
    /// Upper bound of the assistant reply delay, exclusive.
    pub reply_delay_max: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a delay variable is not a number of
    /// milliseconds, or if the reply delay bounds are not an ascending range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let state_dir = PathBuf::from(get_env_or_default("CHOUETTE_STATE_DIR", DEFAULT_STATE_DIR));
        let welcome_delay = get_millis_or_default("CHOUETTE_WELCOME_DELAY_MS", DEFAULT_WELCOME_DELAY_MS)?;
        let reply_delay_min =
            get_millis_or_default("CHOUETTE_REPLY_DELAY_MIN_MS", DEFAULT_REPLY_DELAY_MIN_MS)?;
        let reply_delay_max =
            get_millis_or_default("CHOUETTE_REPLY_DELAY_MAX_MS", DEFAULT_REPLY_DELAY_MAX_MS)?;

        validate_reply_range(reply_delay_min, reply_delay_max)?;

        Ok(Self {
            state_dir,
            welcome_delay,
            reply_delay_min,
            reply_delay_max,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            welcome_delay: Duration::from_millis(DEFAULT_WELCOME_DELAY_MS),
            reply_delay_min: Duration::from_millis(DEFAULT_REPLY_DELAY_MIN_MS),
            reply_delay_max: Duration::from_millis(DEFAULT_REPLY_DELAY_MAX_MS),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a millisecond duration from the environment with a default value.
fn get_millis_or_default(key: &str, default: u64) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_millis(key, &value),
        Err(_) => Ok(Duration::from_millis(default)),
    }
}

/// Parse a millisecond value.
fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Require an ascending, non-empty reply delay range.
fn validate_reply_range(min: Duration, max: Duration) -> Result<(), ConfigError> {
    if min >= max {
        return Err(ConfigError::InvalidEnvVar(
            "CHOUETTE_REPLY_DELAY_MAX_MS".to_string(),
            format!("must be greater than the minimum ({}ms)", min.as_millis()),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis_valid() {
        assert_eq!(parse_millis("X", "500").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_millis("X", " 1000 ").unwrap(), Duration::from_millis(1000));
    }

    #[test]
    fn test_parse_millis_invalid() {
        assert!(parse_millis("X", "fast").is_err());
        assert!(parse_millis("X", "-5").is_err());
        assert!(parse_millis("X", "1.5").is_err());
    }

    #[test]
    fn test_validate_reply_range() {
        assert!(validate_reply_range(Duration::from_millis(1000), Duration::from_millis(3000)).is_ok());
        assert!(validate_reply_range(Duration::from_millis(3000), Duration::from_millis(3000)).is_err());
        assert!(validate_reply_range(Duration::from_millis(3000), Duration::from_millis(1000)).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.state_dir, PathBuf::from(".chouette"));
        assert_eq!(config.welcome_delay, Duration::from_millis(500));
        assert_eq!(config.reply_delay_min, Duration::from_millis(1000));
        assert_eq!(config.reply_delay_max, Duration::from_millis(3000));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEnvVar("CHOUETTE_WELCOME_DELAY_MS".to_string(), "bad".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable CHOUETTE_WELCOME_DELAY_MS: bad"
        );
    }
}
