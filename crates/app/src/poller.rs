//! Poller — refreshes every slot once per interval.
//!
//! Each tick spawns one independent task per slot. A task that gets a
//! reading posts a [`SlotUpdate`] to the [`DisplayStore`]; a task that fails
//! does nothing and the slot keeps its previous value until a later tick
//! succeeds.
//!
//! Tasks are never correlated, retried, deduplicated, or cancelled. When a
//! response from an older tick lands after a newer one, the older value is
//! what remains on display: the last *applied* update wins, not the last
//! *issued* one.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

use sensorpanel_domain::slot::Slot;
use sensorpanel_domain::update::SlotUpdate;

use crate::display_store::DisplayStore;
use crate::ports::ReadingSource;

/// Interval used by the reference page.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Fire-and-forget poller feeding a [`DisplayStore`].
pub struct Poller<S> {
    source: Arc<S>,
    store: DisplayStore,
    interval: Duration,
}

impl<S> Poller<S>
where
    S: ReadingSource + Send + Sync + 'static,
{
    /// Create a poller reading from `source` into `store` every `interval`.
    pub fn new(source: S, store: DisplayStore, interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            store,
            interval,
        }
    }

    /// Time between two ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run the polling loop indefinitely.
    ///
    /// The first tick fires immediately. Ticks are numbered from 1. A tick
    /// never waits for the requests of the previous one. Abort the spawned
    /// task to stop the loop.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut tick: u64 = 0;
        loop {
            ticker.tick().await;
            tick = tick.wrapping_add(1);
            trace!(tick, "poll tick");
            // Detach: handles are dropped, tasks keep running.
            drop(self.dispatch(tick));
        }
    }

    /// Spawn one fetch task per slot for poll cycle `tick`.
    pub fn dispatch(&self, tick: u64) -> Vec<JoinHandle<()>> {
        Slot::ALL
            .into_iter()
            .map(|slot| {
                let source = Arc::clone(&self.source);
                let store = self.store.clone();
                tokio::spawn(fetch_into(source, store, slot, tick))
            })
            .collect()
    }

    /// Dispatch poll cycle `tick` and wait until all four tasks finished.
    pub async fn poll_once(&self, tick: u64) {
        for handle in self.dispatch(tick) {
            if let Err(err) = handle.await {
                warn!(%err, tick, "poll task did not complete");
            }
        }
    }
}

async fn fetch_into<S>(source: Arc<S>, store: DisplayStore, slot: Slot, tick: u64)
where
    S: ReadingSource + Send + Sync,
{
    match source.fetch(slot).await {
        Ok(reading) => {
            trace!(%slot, tick, value = reading.as_str(), "slot updated");
            store.apply(SlotUpdate {
                slot,
                reading,
                tick,
            });
        }
        Err(err) => {
            debug!(%slot, tick, error = %err, "no update this tick");
        }
    }
}
