//! Relay endpoints polled by the panel page.
//!
//! Each endpoint answers `200 text/plain` with the slot's current text,
//! which is the placeholder until the poller has fetched a reading.

use axum::Router;
use axum::extract::State;
use axum::routing::get;

use sensorpanel_domain::slot::Slot;

use crate::state::AppState;

/// Build one `GET /{endpoint}` route per slot.
pub fn routes() -> Router<AppState> {
    Slot::ALL.into_iter().fold(Router::new(), |router, slot| {
        router.route(
            &format!("/{}", slot.endpoint()),
            get(move |State(state): State<AppState>| read(state, slot)),
        )
    })
}

async fn read(state: AppState, slot: Slot) -> String {
    state.store.get(slot).into_string()
}
