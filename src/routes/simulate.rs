//! Failure-simulation endpoints for testing timeout and error handling in
//! gateways and clients downstream of this service.
//!
//! Both endpoints take their parameter from the query string and fall back
//! to a default when it is absent or unparseable, mirroring the
//! configuration-with-defaults pattern used for environment variables. The
//! parameters are deserialized as raw strings so a malformed value selects
//! the default instead of failing the request.

use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::config::{DEFAULT_ERROR_CODE, DEFAULT_SLOW_DELAY_SECS, MAX_SLOW_DELAY_SECS};
use crate::error::json_error;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SlowParams {
    delay: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorParams {
    code: Option<String>,
}

/// Slow response endpoint for testing timeout configurations.
///
/// Query parameter: `delay` (seconds, default 5, capped at 30). The wait is
/// an async timer, so it occupies only this request's task; concurrent
/// requests are served normally while it sleeps.
#[instrument(name = "simulate::slow", skip(state, params))]
pub async fn slow(
    State(state): State<AppState>,
    Query(params): Query<SlowParams>,
) -> Response {
    let delay = resolve_delay(params.delay.as_deref());

    tracing::info!(delay_seconds = delay, "Simulating slow response");
    tokio::time::sleep(Duration::from_secs(delay)).await;

    Json(json!({
        "message": format!("Slow response after {delay} seconds"),
        "delay_seconds": delay,
        "cloud": state.config.instance.cloud_provider,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// Error response endpoint for testing error handling.
///
/// Query parameter: `code` (HTTP status code, default 500). Known codes get
/// a fixed human-readable message; any other code in the representable
/// 100-999 range is echoed with a synthesized message. Codes outside that
/// range are rejected with 400.
#[instrument(name = "simulate::error", skip(state, params))]
pub async fn error(
    State(state): State<AppState>,
    Query(params): Query<ErrorParams>,
) -> Response {
    let cloud = &state.config.instance.cloud_provider;
    let code = resolve_code(params.code.as_deref());

    let Some(status) = status_for_code(code) else {
        tracing::warn!(code, "Rejecting unrepresentable simulated status code");
        return json_error(
            StatusCode::BAD_REQUEST,
            &format!("Invalid simulated status code {code}"),
            cloud,
        );
    };

    tracing::info!(code, "Simulating error response");
    (
        status,
        Json(json!({
            "error": simulated_error_message(code),
            "code": code,
            "cloud": cloud,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Resolve the `delay` parameter: absent or unparseable uses the default,
/// valid values are clamped to 0..=30.
fn resolve_delay(raw: Option<&str>) -> u64 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(delay) => delay.clamp(0, MAX_SLOW_DELAY_SECS as i64) as u64,
        None => DEFAULT_SLOW_DELAY_SECS,
    }
}

/// Resolve the `code` parameter: absent or unparseable uses the default.
fn resolve_code(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_ERROR_CODE)
}

/// Map a requested code to a response status, if representable.
fn status_for_code(code: i64) -> Option<StatusCode> {
    let code = u16::try_from(code).ok()?;
    StatusCode::from_u16(code).ok()
}

/// Human-readable message for the simulated error code.
fn simulated_error_message(code: i64) -> String {
    let fixed = match code {
        400 => "Bad Request - Simulated client error",
        401 => "Unauthorized - Simulated authentication failure",
        403 => "Forbidden - Simulated authorization failure",
        404 => "Not Found - Simulated missing resource",
        429 => "Too Many Requests - Simulated rate limit",
        500 => "Internal Server Error - Simulated server error",
        502 => "Bad Gateway - Simulated upstream error",
        503 => "Service Unavailable - Simulated service failure",
        504 => "Gateway Timeout - Simulated timeout",
        _ => return format!("Simulated error with code {code}"),
    };
    fixed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_defaults_when_absent_or_unparseable() {
        assert_eq!(resolve_delay(None), 5);
        assert_eq!(resolve_delay(Some("soon")), 5);
        assert_eq!(resolve_delay(Some("2.5")), 5);
    }

    #[test]
    fn delay_is_clamped() {
        assert_eq!(resolve_delay(Some("7")), 7);
        assert_eq!(resolve_delay(Some("40")), 30);
        assert_eq!(resolve_delay(Some("-3")), 0);
    }

    #[test]
    fn code_defaults_when_absent_or_unparseable() {
        assert_eq!(resolve_code(None), 500);
        assert_eq!(resolve_code(Some("teapot")), 500);
        assert_eq!(resolve_code(Some("418")), 418);
    }

    #[test]
    fn known_codes_use_fixed_messages() {
        assert_eq!(
            simulated_error_message(404),
            "Not Found - Simulated missing resource"
        );
        assert_eq!(
            simulated_error_message(503),
            "Service Unavailable - Simulated service failure"
        );
    }

    #[test]
    fn unknown_codes_get_synthesized_message() {
        assert_eq!(simulated_error_message(999), "Simulated error with code 999");
        assert_eq!(simulated_error_message(418), "Simulated error with code 418");
    }

    #[test]
    fn status_codes_outside_http_range_are_rejected() {
        assert_eq!(status_for_code(200), Some(StatusCode::OK));
        assert_eq!(status_for_code(999), StatusCode::from_u16(999).ok());
        assert_eq!(status_for_code(9999), None);
        assert_eq!(status_for_code(-1), None);
        assert_eq!(status_for_code(42), None);
    }
}
