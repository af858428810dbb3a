//! Handler for the main greeting endpoint.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::instrument;

use crate::extract::RequestMeta;
use crate::state::AppState;

/// Main hello endpoint.
///
/// Returns a greeting with the cloud provider, the full instance metadata,
/// and the request-derived fields (client address and forwarding headers).
#[instrument(name = "hello::hello", skip(state, meta))]
pub async fn hello(State(state): State<AppState>, meta: RequestMeta) -> Json<Value> {
    let instance = &state.config.instance;

    tracing::info!(
        cloud = %instance.cloud_provider,
        gateway = meta.apim_gateway.as_deref().unwrap_or("-"),
        user_agent = meta.user_agent.as_deref().unwrap_or("-"),
        "Hello request served"
    );

    Json(json!({
        "message": format!("Hello from {}!", instance.cloud_provider),
        "source": instance.cloud_provider,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "instance": {
            "cloud": instance.cloud_provider,
            "region": instance.region,
            "environment": instance.environment,
            "pod_name": instance.pod_name,
            "pod_ip": instance.pod_ip,
        },
        "request": {
            "client_ip": meta.client_ip,
            "forwarded_for": meta.forwarded_for,
            "gateway": meta.apim_gateway,
        },
    }))
}
