//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via an Arc-wrapped
/// configuration.
///
/// The configuration is read-only after startup, so handlers can read it
/// concurrently without any locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
