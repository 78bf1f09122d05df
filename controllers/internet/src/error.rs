//! Hook-specific error types.
//!
//! Probe failures never surface here: the prober collapses them to
//! unavailability before the reconciler sees them. What remains is the
//! small set of server-side failures a sync request can hit.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while serving a sync request.
#[derive(Debug, Error)]
pub enum HookError {
    /// Embedded child manifest failed to parse
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_yaml::Error),
}

impl IntoResponse for HookError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
