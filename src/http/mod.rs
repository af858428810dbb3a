//! HTTP server module.
//!
//! Binds the listener, serves the router with per-connection peer address
//! information, and handles graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
