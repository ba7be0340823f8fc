//! Startup configuration for the monitoring service.
//!
//! Everything is read from the environment exactly once, before any loop is
//! launched, and handed to the supervisor and its collaborators as an owned
//! value. There are no ambient globals and no runtime reconfiguration.

use std::env;

use thiserror::Error;
use url::Url;

/// Statuspage page identifier.
pub const PAGE_ID_VAR: &str = "STATUSPAGE_PAGE_ID";

/// Statuspage API credential.
pub const API_KEY_VAR: &str = "STATUSPAGE_API_KEY";

/// Base URL for the monitored gateway and its node proxies. Optional.
pub const BASE_URL_VAR: &str = "MONITOR_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://aws-lb-mercury-1187443577.us-east-1.elb.amazonaws.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),

    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme in {name}: {scheme}")]
    UnsupportedScheme { name: &'static str, scheme: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub page_id: String,
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// A missing or empty credential is a hard startup error; the service
    /// never starts a loop it cannot report for.
    pub fn from_env() -> Result<Self, ConfigError> {
        let page_id = require_var(PAGE_ID_VAR)?;
        let api_key = require_var(API_KEY_VAR)?;

        let base_url = match env::var(BASE_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => DEFAULT_BASE_URL.to_string(),
        };
        validate_base_url(&base_url)?;

        Ok(Self {
            page_id,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::MissingVar(name))?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyVar(name));
    }
    Ok(value)
}

fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    let parsed =
        Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name: BASE_URL_VAR, source })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::UnsupportedScheme {
            name: BASE_URL_VAR,
            scheme: scheme.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Tests below mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var(PAGE_ID_VAR);
        env::remove_var(API_KEY_VAR);
        env::remove_var(BASE_URL_VAR);
    }

    #[test]
    fn missing_credentials_fail_fast() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let error = Config::from_env().unwrap_err();
        assert!(matches!(error, ConfigError::MissingVar(PAGE_ID_VAR)));
    }

    #[test]
    fn empty_api_key_fails_fast() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(PAGE_ID_VAR, "pg1");
        env::set_var(API_KEY_VAR, "  ");

        let error = Config::from_env().unwrap_err();
        assert!(matches!(error, ConfigError::EmptyVar(API_KEY_VAR)));

        clear_env();
    }

    #[test]
    fn base_url_defaults_and_normalizes() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(PAGE_ID_VAR, "pg1");
        env::set_var(API_KEY_VAR, "key1");

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        env::set_var(BASE_URL_VAR, "https://gateway.example.com/");
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://gateway.example.com");

        clear_env();
    }

    #[test]
    fn rejects_non_http_base_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(PAGE_ID_VAR, "pg1");
        env::set_var(API_KEY_VAR, "key1");
        env::set_var(BASE_URL_VAR, "ftp://gateway.example.com");

        let error = Config::from_env().unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedScheme { .. }));

        clear_env();
    }
}
