//! Configuration structures for Grafana clients.
//!
//! This module provides the connection settings for a Grafana instance,
//! including credentials, TLS behavior, and validation.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for a Grafana client instance.
///
/// The API key is never serialized; load it from the environment or a secret
/// store and attach it with [`GrafanaClientConfig::with_api_key`].
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct GrafanaClientConfig {
    /// Grafana base URL
    #[validate(url)]
    pub url: String,

    /// Optional API key or service account token (sent as a Bearer token)
    #[serde(skip)]
    pub api_key: Option<SecretString>,

    /// Optional basic auth user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Optional basic auth password
    #[serde(skip)]
    pub password: Option<SecretString>,

    /// Organization to act in (sent as `X-Grafana-Org-Id`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl GrafanaClientConfig {
    /// Create a new client configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            url: url.into(),
            api_key: None,
            username: None,
            password: None,
            org_id: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the API key for Bearer authentication.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set basic auth credentials.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Set the organization id header.
    #[must_use]
    pub const fn with_org_id(mut self, org_id: u64) -> Self {
        self.org_id = Some(org_id);
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the value for the `Authorization` header, if any.
    ///
    /// An API key takes precedence over basic auth. Basic auth is returned
    /// as `None` here because reqwest encodes it itself.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| format!("Bearer {}", key.expose_secret()))
    }

    /// Returns the basic auth pair when no API key is configured.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        if self.api_key.is_some() {
            return None;
        }
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.expose_secret())),
            _ => None,
        }
    }

    /// Parse and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_url(&self) -> Result<Url, Error> {
        Url::parse(&self.url).map_err(|e| Error::ConfigError(format!("Invalid Grafana URL: {e}")))
    }
}

impl Default for GrafanaClientConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
            api_key: None,
            username: None,
            password: None,
            org_id: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = GrafanaClientConfig::new("https://grafana.example.com").unwrap();
        assert_eq!(config.url, "https://grafana.example.com");
        assert!(config.api_key.is_none());
        assert!(config.tls_verify);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_invalid_url() {
        let result = GrafanaClientConfig::new("not-a-url");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_config_builder() {
        let config = GrafanaClientConfig::new("https://grafana.example.com")
            .unwrap()
            .with_api_key("secret-key")
            .with_org_id(2)
            .with_tls_verify(false)
            .with_timeout(60);

        assert_eq!(config.org_id, Some(2));
        assert!(!config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.bearer_token().as_deref(), Some("Bearer secret-key"));
    }

    #[test]
    fn test_api_key_wins_over_basic_auth() {
        let config = GrafanaClientConfig::default()
            .with_basic_auth("admin", "admin")
            .with_api_key("key");
        assert!(config.basic_auth().is_none());
        assert!(config.bearer_token().is_some());

        let config = GrafanaClientConfig::default().with_basic_auth("admin", "pw");
        assert_eq!(config.basic_auth(), Some(("admin", "pw")));
        assert!(config.bearer_token().is_none());
    }

    #[test]
    fn test_secrets_are_not_serialized() {
        let config = GrafanaClientConfig::new("https://grafana.example.com")
            .unwrap()
            .with_api_key("do-not-leak")
            .with_basic_auth("admin", "hunter2");

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("do-not-leak"));
        assert!(!json.contains("hunter2"));
        assert!(json.contains("admin"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("do-not-leak"));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: GrafanaClientConfig =
            serde_json::from_str(r#"{"url":"http://grafana:3000"}"#).unwrap();
        assert!(config.tls_verify);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = GrafanaClientConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 301;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_url() {
        let config = GrafanaClientConfig::new("http://grafana:3000").unwrap();
        let url = config.parse_url().unwrap();
        assert_eq!(url.host_str(), Some("grafana"));
        assert_eq!(url.port(), Some(3000));
    }
}
