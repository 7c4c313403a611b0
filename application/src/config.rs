//! [`Config`]-related definitions.

use std::{str::FromStr, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::Deserialize;
use service::infra::http::{self, Url};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Remote API configuration.
    pub api: Api,

    /// Listings configuration.
    pub listing: Listing,

    /// UI configuration.
    pub ui: Ui,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Remote API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL every API path is resolved against.
    #[default("http://localhost:8080/api/".to_owned())]
    pub base_url: String,

    /// Bearer token to authorize requests with.
    pub token: Option<SecretString>,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl TryFrom<Api> for http::Config {
    type Error = <Url as FromStr>::Err;

    fn try_from(value: Api) -> Result<Self, Self::Error> {
        let Api {
            base_url,
            token,
            timeout,
        } = value;

        Ok(Self {
            base_url: base_url.parse()?,
            token,
            timeout,
        })
    }
}

/// Listings configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Listing {
    /// Number of users shown on a single page.
    #[default(10)]
    pub users_page_size: usize,

    /// Number of vehicles shown on a single page.
    #[default(6)]
    pub inventory_page_size: usize,
}

/// UI configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Ui {
    /// Delay before leaving a screen after a successful mutation.
    #[default(time::Duration::from_millis(1500))]
    #[serde(with = "humantime_serde")]
    pub success_redirect_delay: time::Duration,

    /// Delay before leaving a screen whose entity failed to load.
    #[default(time::Duration::from_secs(2))]
    #[serde(with = "humantime_serde")]
    pub failure_redirect_delay: time::Duration,
}

impl From<Ui> for service::Config {
    fn from(value: Ui) -> Self {
        let Ui {
            success_redirect_delay,
            failure_redirect_delay,
        } = value;

        Self {
            success_redirect_delay,
            failure_redirect_delay,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use service::infra::http;

    use super::{Api, Config};

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.listing.users_page_size, 10);
        assert_eq!(config.listing.inventory_page_size, 6);
        assert_eq!(config.api.timeout, Duration::from_secs(30));
        assert!(config.api.token.is_none());

        let service = service::Config::from(config.ui);
        assert_eq!(service.success_redirect_delay, Duration::from_millis(1500));
        assert_eq!(service.failure_redirect_delay, Duration::from_secs(2));
    }

    #[test]
    fn converts_api() {
        let http = http::Config::try_from(Api::default()).unwrap();
        assert_eq!(http.base_url.as_str(), "http://localhost:8080/api/");

        let malformed = Api {
            base_url: "not a url".into(),
            ..Api::default()
        };
        assert!(http::Config::try_from(malformed).is_err());
    }
}
