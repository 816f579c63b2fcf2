//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `ACCESS_LOAD_DELAY_MS` - Simulated account lookup latency (default: 300)
//! - `ACCESS_LOAD_TIMEOUT_MS` - How long a page waits for the lookup before
//!   rendering the loading view (default: 3000)
//! - `CHAT_TRANSLATE_DELAY_MS` - Chat "translating" phase (default: 800)
//! - `CHAT_TYPING_DELAY_MS` - Chat "typing" phase (default: 1200)
//! - `CHAT_EMAIL_DELAY_MS` - Simulated transcript delivery (default: 600)
//! - `STOREFRONT_MOCK_CONTROLS` - Expose `/mock/access` (default: true)
//! - `STOREFRONT_RATE_LIMIT` - Rate limit form and chat posts (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Simulated mock-backend behaviour
    pub mock: MockBackendConfig,
    /// Expose the mock access controls page
    pub mock_controls: bool,
    /// Apply rate limiting to form and chat posts
    pub rate_limit: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Artificial latencies standing in for backend calls.
#[derive(Debug, Clone, Copy)]
pub struct MockBackendConfig {
    pub access_load_delay: Duration,
    pub access_load_timeout: Duration,
    pub chat_translate_delay: Duration,
    pub chat_typing_delay: Duration,
    pub chat_email_delay: Duration,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            access_load_delay: Duration::from_millis(300),
            access_load_timeout: Duration::from_millis(3000),
            chat_translate_delay: Duration::from_millis(800),
            chat_typing_delay: Duration::from_millis(1200),
            chat_email_delay: Duration::from_millis(600),
        }
    }
}

impl MockBackendConfig {
    /// No artificial latency; the access lookup never times out in practice.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            access_load_delay: Duration::ZERO,
            access_load_timeout: Duration::from_secs(30),
            chat_translate_delay: Duration::ZERO,
            chat_typing_delay: Duration::ZERO,
            chat_email_delay: Duration::ZERO,
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            access_load_delay: get_millis("ACCESS_LOAD_DELAY_MS", defaults.access_load_delay)?,
            access_load_timeout: get_millis(
                "ACCESS_LOAD_TIMEOUT_MS",
                defaults.access_load_timeout,
            )?,
            chat_translate_delay: get_millis(
                "CHAT_TRANSLATE_DELAY_MS",
                defaults.chat_translate_delay,
            )?,
            chat_typing_delay: get_millis("CHAT_TYPING_DELAY_MS", defaults.chat_typing_delay)?,
            chat_email_delay: get_millis("CHAT_EMAIL_DELAY_MS", defaults.chat_email_delay)?,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            mock: MockBackendConfig::default(),
            mock_controls: true,
            rate_limit: true,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that does not
    /// parse, or if the base URL has no host.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = get_parsed("STOREFRONT_HOST", defaults.host)?;
        let port = get_parsed("STOREFRONT_PORT", defaults.port)?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", &defaults.base_url);
        validate_base_url(&base_url)?;

        Ok(Self {
            host,
            port,
            base_url,
            mock: MockBackendConfig::from_env()?,
            mock_controls: get_bool("STOREFRONT_MOCK_CONTROLS", defaults.mock_controls)?,
            rate_limit: get_bool("STOREFRONT_RATE_LIMIT", defaults.rate_limit)?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_parsed("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?,
            sentry_traces_sample_rate: get_parsed(
                "SENTRY_TRACES_SAMPLE_RATE",
                defaults.sentry_traces_sample_rate,
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn get_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a millisecond duration.
fn get_millis(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    get_parsed(key, default_ms).map(Duration::from_millis)
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
fn get_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_bool(&raw).ok_or_else(|| {
        ConfigError::InvalidEnvVar(key.to_string(), format!("expected a boolean, got '{raw}'"))
    }))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The base URL must be absolute and carry a host.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url).map_err(|e| {
        ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_BASE_URL".to_string(),
            "base URL must have a host".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 1 "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:3000").is_ok());
        assert!(validate_base_url("https://shop.tradehub.kr").is_ok());
        assert!(validate_base_url("not a url").is_err());
        assert!(matches!(
            validate_base_url("mailto:someone@example.com"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::default();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = StorefrontConfig::default();
        assert!(!config.is_secure());
        config.base_url = "https://shop.tradehub.kr".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_instant_mock_has_no_delays() {
        let mock = MockBackendConfig::instant();
        assert_eq!(mock.access_load_delay, Duration::ZERO);
        assert_eq!(mock.chat_typing_delay, Duration::ZERO);
        assert!(mock.access_load_timeout > Duration::ZERO);
    }
}
