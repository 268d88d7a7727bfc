//! HTTP source construction errors.

use sensorpanel_domain::error::BoxError;

/// Errors raised while building an [`HttpReadingSource`](crate::HttpReadingSource).
///
/// Per-request failures are not represented here; they surface as
/// [`FetchError`](sensorpanel_domain::error::FetchError) from `fetch`.
#[derive(Debug, thiserror::Error)]
pub enum HttpSourceError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base url {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("base url {0:?} cannot be used for http requests")]
    UnsupportedUrl(String),

    /// The reqwest client could not be built.
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
}
