//! Shared application state for axum handlers.

use sensorpanel_app::display_store::DisplayStore;

/// Application state shared across all axum handlers.
///
/// `DisplayStore` is itself a cheap handle, so cloning the state never
/// copies the display.
#[derive(Clone)]
pub struct AppState {
    /// Current display values, written by the poller.
    pub store: DisplayStore,
    /// How often the served page re-polls the relay endpoints.
    pub refresh_ms: u64,
}

impl AppState {
    /// Create a new application state around `store`.
    #[must_use]
    pub fn new(store: DisplayStore, refresh_ms: u64) -> Self {
        Self { store, refresh_ms }
    }
}
