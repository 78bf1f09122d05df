//! HTTP surface of the sync hook.
//!
//! Exposes the metacontroller-facing `POST /reconcile` endpoint plus a
//! liveness probe, with request-level tracing. Payload validation happens
//! in the `Json` extractor: a request that does not deserialize into
//! [`SyncRequest`] is rejected before the reconciler runs.

use crate::error::HookError;
use crate::reconciler::Reconciler;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use hook_api::{SyncRequest, SyncResponse};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The reconciler computing desired state
    pub reconciler: Arc<Reconciler>,
}

/// Build the hook router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Sync hook endpoint.
async fn reconcile(
    State(state): State<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, HookError> {
    let response = state.reconciler.reconcile(&request).await?;
    Ok(Json(response))
}

/// Liveness probe.
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "internet-controller",
    }))
}
