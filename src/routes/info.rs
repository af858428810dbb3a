//! Service metadata endpoint for debugging deployments.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::{local_hostname, SERVICE_NAME, SERVICE_VERSION, UNKNOWN_VALUE};
use crate::state::AppState;

/// Detailed information endpoint.
///
/// Reports the service identity alongside the instance metadata. The
/// `hostname` field is looked up live rather than taken from the cached
/// `pod_name` fallback, so the two can differ when POD_NAME is set.
pub async fn info(State(state): State<AppState>) -> Json<Value> {
    let instance = &state.config.instance;

    Json(json!({
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "cloud_provider": instance.cloud_provider,
        "region": instance.region,
        "environment": instance.environment,
        "instance": {
            "pod_name": instance.pod_name,
            "pod_ip": instance.pod_ip,
            "hostname": local_hostname().unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
