//! JSON view of the display.

pub mod display;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/display", get(display::get))
}
