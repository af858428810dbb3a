//! Liveness and readiness probes for container orchestration.
//!
//! Both probes succeed whenever the process can respond to HTTP. The service
//! holds no downstream connections or mutable state, so readiness has no
//! extra conditions beyond liveness; only the `status` string differs.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by both probe endpoints.
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub cloud: String,
    pub timestamp: String,
}

/// Liveness probe handler.
pub async fn health(State(state): State<AppState>) -> Json<ProbeResponse> {
    probe_response("healthy", &state)
}

/// Readiness probe handler.
pub async fn ready(State(state): State<AppState>) -> Json<ProbeResponse> {
    probe_response("ready", &state)
}

fn probe_response(status: &'static str, state: &AppState) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status,
        cloud: state.config.instance.cloud_provider.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
