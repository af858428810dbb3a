//! hello-api: a multi-cloud demonstration API.
//!
//! Exposes a greeting endpoint that echoes deployment metadata, liveness and
//! readiness probes, a service-info endpoint, and two failure-simulation
//! endpoints for exercising timeout and error handling in downstream
//! gateways. Configuration is read once from environment variables at
//! startup and is immutable afterwards.

pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
