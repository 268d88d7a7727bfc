//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sensorpanel.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use sensorpanel_adapter_http_reqwest::HttpSourceConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Host device the readings are fetched from.
    pub upstream: HttpSourceConfig,
    /// Polling cadence.
    pub poller: PollerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Poller configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Milliseconds between two ticks. Also used by the served page.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `sensorpanel.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sensorpanel.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SENSORPANEL_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("SENSORPANEL_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("SENSORPANEL_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SENSORPANEL_UPSTREAM_URL") {
            self.upstream.base_url = val;
        }
        if let Some(ms) = var("SENSORPANEL_POLL_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.poller.interval_ms = ms;
        }
        if let Some(val) = var("SENSORPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.poller.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.upstream.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "upstream base_url must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Time between two poll ticks.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poller.interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensorpaneld=info,sensorpanel=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, val)| ((*key).to_string(), (*val).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.base_url, "http://192.168.4.1/");
        assert_eq!(config.poller.interval_ms, 1000);
        assert_eq!(config.upstream.request_timeout_ms, None);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [upstream]
            base_url = 'http://esp32.local/'
            request_timeout_ms = 900

            [poller]
            interval_ms = 2000

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.upstream.base_url, "http://esp32.local/");
        assert_eq!(config.upstream.request_timeout_ms, Some(900));
        assert_eq!(config.poller.interval_ms, 2000);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.poller.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_blank_upstream_url() {
        let mut config = Config::default();
        config.upstream.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_override_from_environment() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("SENSORPANEL_HOST", "127.0.0.1"),
            ("SENSORPANEL_PORT", "8081"),
            ("SENSORPANEL_UPSTREAM_URL", "http://10.0.0.7/"),
            ("SENSORPANEL_POLL_INTERVAL_MS", "500"),
            ("SENSORPANEL_LOG", "trace"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.upstream.base_url, "http://10.0.0.7/");
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_split_bind_override_into_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORPANEL_BIND", "192.168.1.2:8000")]));
        assert_eq!(config.server.host, "192.168.1.2");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_prefer_rust_log_over_sensorpanel_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("SENSORPANEL_LOG", "info"), ("RUST_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_unparsable_numeric_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("SENSORPANEL_PORT", "http"),
            ("SENSORPANEL_POLL_INTERVAL_MS", "soon"),
        ]));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.poller.interval_ms, 1000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
