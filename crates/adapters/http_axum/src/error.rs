//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure while producing an HTML page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The template engine failed to render.
    #[error("failed to render template")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
