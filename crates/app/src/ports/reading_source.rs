//! Reading source port — fetch the current value of one slot.

use std::future::Future;

use sensorpanel_domain::error::FetchError;
use sensorpanel_domain::reading::Reading;
use sensorpanel_domain::slot::Slot;

/// Something that can answer "what does `slot` read right now?".
///
/// Implementations issue a single request with no parameters and no body.
/// Any failure is reported as a [`FetchError`]; callers never retry.
pub trait ReadingSource {
    /// Fetch the current reading for `slot`.
    fn fetch(&self, slot: Slot) -> impl Future<Output = Result<Reading, FetchError>> + Send;
}

impl<T: ReadingSource + Send + Sync> ReadingSource for std::sync::Arc<T> {
    fn fetch(&self, slot: Slot) -> impl Future<Output = Result<Reading, FetchError>> + Send {
        (**self).fetch(slot)
    }
}
