//! Upstream device configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the host device lives and how patiently to talk to it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSourceConfig {
    /// Base URL of the host device (e.g. `http://192.168.4.1/`).
    pub base_url: String,
    /// Whole-request timeout in milliseconds. Unset means the transport
    /// default (no timeout), so a device that accepts connections but never
    /// answers leaves four requests open per tick. Set it to a value at or
    /// below the poll interval (e.g. `1000`) when the device may hang.
    pub request_timeout_ms: Option<u64>,
    /// TCP connect timeout in milliseconds. Unset means the transport default.
    pub connect_timeout_ms: Option<u64>,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1/".to_string(),
            request_timeout_ms: None,
            connect_timeout_ms: None,
        }
    }
}

impl HttpSourceConfig {
    /// Configured request timeout, if any.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Configured connect timeout, if any.
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }
}
