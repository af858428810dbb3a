//! Error responses in the flat JSON shape shared by every failure path.
//!
//! All error bodies carry `error`, `cloud`, and `timestamp` fields so that
//! callers see a consistent shape regardless of whether the failure was a
//! missing route, a handler panic, or a deliberately simulated error.

use std::any::Any;

use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_http::catch_panic::ResponseForPanic;

use crate::state::AppState;

/// Build a JSON error response with the given status and message.
pub fn json_error(status: StatusCode, message: &str, cloud: &str) -> Response {
    (
        status,
        Json(json!({
            "error": message,
            "cloud": cloud,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Fallback handler for unmatched paths.
pub async fn not_found(State(state): State<AppState>) -> Response {
    json_error(
        StatusCode::NOT_FOUND,
        "Endpoint not found",
        &state.config.instance.cloud_provider,
    )
}

/// Converts handler panics into the generic 500 JSON body.
///
/// The panic payload is logged server-side; the client only ever sees the
/// generic message, never a panic message or backtrace.
#[derive(Clone)]
pub struct JsonPanicHandler {
    cloud: String,
}

impl JsonPanicHandler {
    pub fn new(cloud: impl Into<String>) -> Self {
        Self {
            cloud: cloud.into(),
        }
    }
}

impl ResponseForPanic for JsonPanicHandler {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        tracing::error!(panic = %detail, "Handler panicked");

        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            &self.cloud,
        )
    }
}
