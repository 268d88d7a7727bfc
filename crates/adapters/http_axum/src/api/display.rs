//! `GET /api/display` — snapshot of every slot.

use axum::Json;
use axum::extract::State;

use sensorpanel_domain::display::Display;

use crate::state::AppState;

/// `GET /api/display` — current display state as JSON.
pub async fn get(State(state): State<AppState>) -> Json<Display> {
    Json(state.store.snapshot())
}
