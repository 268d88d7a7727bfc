//! [`ReadingSource`] over HTTP GET.

use reqwest::{StatusCode, Url};

use sensorpanel_app::ports::ReadingSource;
use sensorpanel_domain::error::FetchError;
use sensorpanel_domain::reading::Reading;
use sensorpanel_domain::slot::Slot;

use crate::config::HttpSourceConfig;
use crate::error::HttpSourceError;

/// Reads slots from the host device's plain-text endpoints.
pub struct HttpReadingSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpReadingSource {
    /// Build a source from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpSourceError`] if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &HttpSourceConfig) -> Result<Self, HttpSourceError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build().map_err(HttpSourceError::Client)?;

        tracing::debug!(base_url = %base_url, "http reading source ready");
        Ok(Self { client, base_url })
    }

    /// Base URL every endpoint is resolved against. Always ends with `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl ReadingSource for HttpReadingSource {
    async fn fetch(&self, slot: Slot) -> Result<Reading, FetchError> {
        let url = self
            .base_url
            .join(slot.endpoint())
            .map_err(FetchError::transport)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::body)?;
        Ok(Reading::from(body))
    }
}

/// Parse `raw` and make sure its path ends with `/` so that joining an
/// endpoint name appends a segment instead of replacing the last one.
fn normalize_base_url(raw: &str) -> Result<Url, HttpSourceError> {
    let mut url = Url::parse(raw).map_err(|err| HttpSourceError::InvalidUrl {
        url: raw.to_string(),
        source: Box::new(err),
    })?;
    if url.cannot_be_a_base() {
        return Err(HttpSourceError::UnsupportedUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
