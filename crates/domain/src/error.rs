//! Error taxonomy for reading the host device.
//!
//! There is one outcome, "no update this tick", so every variant is handled
//! the same way by the poller: the slot keeps its current value. The variants
//! only exist so logs can say what went wrong.

/// Boxed source error from an IO adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A read did not produce a usable reading.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection refused, reset, timed out, …
    #[error("transport failure")]
    Transport(#[source] BoxError),

    /// The device answered with something other than `200 OK`.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("failed to read response body")]
    Body(#[source] BoxError),
}

impl FetchError {
    /// Wrap a transport-level error.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// Wrap a body-read error.
    pub fn body(err: impl Into<BoxError>) -> Self {
        Self::Body(err.into())
    }
}
