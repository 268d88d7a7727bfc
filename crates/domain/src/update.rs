//! Field-update message posted by a completed fetch.

use crate::reading::Reading;
use crate::slot::Slot;

/// A successful fetch result, addressed to one slot.
///
/// `tick` records which poll cycle issued the request. It is carried for
/// diagnostics only; updates are applied in arrival order regardless of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub slot: Slot,
    pub reading: Reading,
    pub tick: u64,
}

impl SlotUpdate {
    /// Build an update for `slot` issued by poll cycle `tick`.
    #[must_use]
    pub fn new(slot: Slot, reading: impl Into<Reading>, tick: u64) -> Self {
        Self {
            slot,
            reading: reading.into(),
            tick,
        }
    }
}
