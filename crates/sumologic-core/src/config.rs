//! Configuration for Sumo Logic clients.
//!
//! This module provides the credential pair used for HTTP Basic auth, the
//! deployment (region) table that selects the API base URL, and the
//! connection settings applied to the underlying HTTP client.

use crate::error::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Environment variable holding the access ID.
pub const ENV_ACCESS_ID: &str = "SUMOLOGIC_ACCESSID";

/// Environment variable holding the access key.
pub const ENV_ACCESS_KEY: &str = "SUMOLOGIC_ACCESSKEY";

/// Environment variable holding the deployment code.
pub const ENV_ENVIRONMENT: &str = "SUMOLOGIC_ENVIRONMENT";

/// Sumo Logic API credentials (access ID and access key).
///
/// The key is held as a [`SecretString`] so it is redacted from debug output.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_id: String,
    access_key: SecretString,
}

impl Credentials {
    /// Create credentials from an access ID and key.
    pub fn new(access_id: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            access_key: SecretString::from(access_key.into()),
        }
    }

    /// Read credentials from `SUMOLOGIC_ACCESSID` / `SUMOLOGIC_ACCESSKEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either variable is unset.
    pub fn from_env() -> Result<Self> {
        let access_id = std::env::var(ENV_ACCESS_ID)
            .map_err(|_| Error::Config(format!("{ENV_ACCESS_ID} is not set")))?;
        let access_key = std::env::var(ENV_ACCESS_KEY)
            .map_err(|_| Error::Config(format!("{ENV_ACCESS_KEY} is not set")))?;
        Ok(Self::new(access_id, access_key))
    }

    /// The access ID (Basic auth username).
    #[must_use]
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    /// Expose the access key (Basic auth password).
    #[must_use]
    pub fn access_key(&self) -> &str {
        self.access_key.expose_secret()
    }
}

/// A Sumo Logic deployment (region).
///
/// Each deployment has a fixed API base URL. Unknown deployment codes are a
/// configuration error at parse time, so a client is never constructed with a
/// broken base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    /// Australia (Sydney).
    Au,
    /// Canada (Montreal).
    Ca,
    /// Germany (Frankfurt).
    De,
    /// Europe (Dublin).
    Eu,
    /// US FedRAMP.
    Fed,
    /// India (Mumbai).
    In,
    /// Japan (Tokyo).
    Jp,
    /// US East (the original deployment; no region infix in its hostname).
    Us1,
    /// US West.
    Us2,
}

impl Deployment {
    /// Every known deployment.
    pub const ALL: [Self; 9] = [
        Self::Au,
        Self::Ca,
        Self::De,
        Self::Eu,
        Self::Fed,
        Self::In,
        Self::Jp,
        Self::Us1,
        Self::Us2,
    ];

    /// Short deployment code as used in configuration.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Au => "au",
            Self::Ca => "ca",
            Self::De => "de",
            Self::Eu => "eu",
            Self::Fed => "fed",
            Self::In => "in",
            Self::Jp => "jp",
            Self::Us1 => "us1",
            Self::Us2 => "us2",
        }
    }

    /// API base URL for this deployment, as a string.
    #[must_use]
    pub const fn base_url_str(self) -> &'static str {
        match self {
            Self::Au => "https://api.au.sumologic.com/api/",
            Self::Ca => "https://api.ca.sumologic.com/api/",
            Self::De => "https://api.de.sumologic.com/api/",
            Self::Eu => "https://api.eu.sumologic.com/api/",
            Self::Fed => "https://api.fed.sumologic.com/api/",
            Self::In => "https://api.in.sumologic.com/api/",
            Self::Jp => "https://api.jp.sumologic.com/api/",
            Self::Us1 => "https://api.sumologic.com/api/",
            Self::Us2 => "https://api.us2.sumologic.com/api/",
        }
    }

    /// Parse the API base URL for this deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the table entry is not a valid URL (cannot happen
    /// for the fixed table, but the parse is propagated rather than hidden).
    pub fn base_url(self) -> Result<Url> {
        Url::parse(self.base_url_str()).map_err(Error::from)
    }

    /// Read the deployment from `SUMOLOGIC_ENVIRONMENT`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or names an
    /// unknown deployment.
    pub fn from_env() -> Result<Self> {
        let code = std::env::var(ENV_ENVIRONMENT)
            .map_err(|_| Error::Config(format!("{ENV_ENVIRONMENT} is not set")))?;
        code.parse()
    }
}

impl FromStr for Deployment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|deployment| deployment.code() == code)
            .ok_or_else(|| Error::Config(format!("unknown Sumo Logic deployment `{s}`")))
    }
}

impl std::fmt::Display for Deployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Connection settings for the underlying HTTP client.
#[derive(Debug, Clone, Validate)]
pub struct ConnectionConfig {
    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds.
    #[validate(range(min = 1, max = 60))]
    pub connect_timeout_secs: u64,

    /// Connection pool idle timeout in seconds.
    #[validate(range(min = 1, max = 600))]
    pub pool_idle_timeout_secs: u64,

    /// Maximum idle connections per host.
    #[validate(range(min = 1, max = 100))]
    pub pool_max_idle_per_host: usize,

    /// Outbound request budget per minute, shared through the rate limiter.
    #[validate(range(min = 1, max = 10_000))]
    pub rate_budget_per_minute: u32,
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

const fn default_pool_idle_timeout_secs() -> u64 {
    90
}

const fn default_pool_max_idle_per_host() -> usize {
    10
}

impl ConnectionConfig {
    /// Create a connection configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
            rate_budget_per_minute: crate::limit::DEFAULT_RATE_PER_MINUTE,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = seconds;
        self
    }

    /// Set the connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, seconds: u64) -> Self {
        self.pool_idle_timeout_secs = seconds;
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Set the per-minute request budget.
    #[must_use]
    pub const fn with_rate_budget(mut self, per_minute: u32) -> Self {
        self.rate_budget_per_minute = per_minute;
        self
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Pool idle timeout as a [`Duration`].
    #[must_use]
    pub const fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_accessors() {
        let creds = Credentials::new("suABC", "sekrit");
        assert_eq!(creds.access_id(), "suABC");
        assert_eq!(creds.access_key(), "sekrit");
    }

    #[test]
    fn credentials_debug_redacts_key() {
        let creds = Credentials::new("suABC", "sekrit");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("sekrit"));
        assert!(debug.contains("suABC"));
    }

    #[test]
    fn deployment_base_url_table() {
        let expected = [
            (Deployment::Au, "https://api.au.sumologic.com/api/"),
            (Deployment::Ca, "https://api.ca.sumologic.com/api/"),
            (Deployment::De, "https://api.de.sumologic.com/api/"),
            (Deployment::Eu, "https://api.eu.sumologic.com/api/"),
            (Deployment::Fed, "https://api.fed.sumologic.com/api/"),
            (Deployment::In, "https://api.in.sumologic.com/api/"),
            (Deployment::Jp, "https://api.jp.sumologic.com/api/"),
            (Deployment::Us1, "https://api.sumologic.com/api/"),
            (Deployment::Us2, "https://api.us2.sumologic.com/api/"),
        ];

        for (deployment, url) in expected {
            assert_eq!(deployment.base_url_str(), url);
            assert_eq!(deployment.base_url().unwrap().as_str(), url);
        }
    }

    #[test]
    fn deployment_from_str_known_codes() {
        for deployment in Deployment::ALL {
            assert_eq!(deployment.code().parse::<Deployment>().unwrap(), deployment);
        }
        // Case and whitespace are tolerated.
        assert_eq!(" US1 ".parse::<Deployment>().unwrap(), Deployment::Us1);
    }

    #[test]
    fn deployment_from_str_unknown_code_is_config_error() {
        let err = "us3".parse::<Deployment>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("us3"));
    }

    #[test]
    fn deployment_display_round_trips() {
        assert_eq!(Deployment::Eu.to_string(), "eu");
    }

    #[test]
    fn connection_config_defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.pool_max_idle_per_host, 10);
        assert_eq!(config.rate_budget_per_minute, 240);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn connection_config_builder() {
        let config = ConnectionConfig::new()
            .with_request_timeout(60)
            .with_connect_timeout(5)
            .with_pool_idle_timeout(120)
            .with_pool_max_idle(20)
            .with_rate_budget(60);

        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.pool_idle_timeout(), Duration::from_secs(120));
        assert_eq!(config.pool_max_idle_per_host, 20);
        assert_eq!(config.rate_budget_per_minute, 60);
    }

    #[test]
    fn connection_config_validation_ranges() {
        let mut config = ConnectionConfig::new();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 30;
        config.rate_budget_per_minute = 0;
        assert!(config.validate().is_err());

        config.rate_budget_per_minute = 240;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn connection_config_validates_pool_settings() {
        let mut config = ConnectionConfig::new();
        config.pool_idle_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.pool_idle_timeout_secs = 90;
        config.pool_max_idle_per_host = 0;
        assert!(config.validate().is_err());

        config.pool_max_idle_per_host = 101;
        assert!(config.validate().is_err());

        config.pool_max_idle_per_host = 10;
        assert!(config.validate().is_ok());
    }
}
