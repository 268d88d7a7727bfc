//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the panel page at `/`, the relay endpoints next to it, and the
/// JSON snapshot under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::page::index))
        .merge(crate::readings::routes())
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
