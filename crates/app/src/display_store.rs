//! In-process display state backed by a tokio watch channel.

use std::sync::Arc;

use tokio::sync::watch;

use sensorpanel_domain::display::Display;
use sensorpanel_domain::reading::Reading;
use sensorpanel_domain::slot::Slot;
use sensorpanel_domain::update::SlotUpdate;

/// Shared handle to the current [`Display`].
///
/// Cloning is cheap; all clones observe and mutate the same state. Updates
/// are stored even when nobody is subscribed.
#[derive(Clone)]
pub struct DisplayStore {
    sender: Arc<watch::Sender<Display>>,
}

impl Default for DisplayStore {
    fn default() -> Self {
        Self::new(Display::default())
    }
}

impl DisplayStore {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: Display) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Apply a field-update message and notify subscribers.
    pub fn apply(&self, update: SlotUpdate) {
        self.sender.send_modify(|display| display.apply(update));
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Display {
        self.sender.borrow().clone()
    }

    /// Current content of a single slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Reading {
        self.sender.borrow().get(slot).clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver sees the current state immediately and is woken on
    /// every subsequent update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Display> {
        self.sender.subscribe()
    }
}
