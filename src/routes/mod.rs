//! HTTP route handlers for the API.
//!
//! Probe and simulation routes carry a `Cache-Control: no-store` header so
//! orchestrator probes and failure-injection tests are never answered from
//! an upstream cache.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request. Unmatched paths fall through to a JSON 404, and handler panics
//! are converted to a JSON 500 without leaking internal detail.

pub mod hello;
pub mod info;
pub mod probes;
pub mod simulate;

use axum::{
    middleware,
    routing::get,
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::{catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer};

use crate::error::{self, JsonPanicHandler};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes, the 404 fallback, and the
/// panic-to-500 and request ID layers.
pub fn create_router(state: AppState) -> Router {
    // Greeting and metadata endpoints
    let api_routes = Router::new()
        .route("/hello", get(hello::hello))
        .route("/info", get(info::info));

    // Probes and simulation endpoints - always fresh, never cached
    let uncached_routes = Router::new()
        .route("/health", get(probes::health))
        .route("/ready", get(probes::ready))
        .route("/simulate/slow", get(simulate::slow))
        .route("/simulate/error", get(simulate::error))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let panic_handler = JsonPanicHandler::new(&state.config.instance.cloud_provider);

    Router::new()
        .merge(api_routes)
        .merge(uncached_routes)
        .fallback(error::not_found)
        .with_state(state)
        // Panic handler - converts handler panics into the generic JSON 500
        .layer(CatchPanicLayer::custom(panic_handler))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
