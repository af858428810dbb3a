//! Configuration loading and constants.
//!
//! Loads application configuration from environment variables at startup and
//! defines constants for the simulation endpoints, logging filters, and
//! service identity. `AppConfig` is the root configuration struct; it is
//! constructed once at process entry and never mutated afterwards.

use std::env;

// =============================================================================
// Service Identity
// =============================================================================

/// Service name reported by /info
pub const SERVICE_NAME: &str = "hello-api";

/// Service version reported by /info (taken from Cargo.toml)
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Simulation Endpoint Constants
// =============================================================================

/// Delay in seconds used by /simulate/slow when the `delay` parameter is
/// absent or unparseable
pub const DEFAULT_SLOW_DELAY_SECS: u64 = 5;

/// Upper bound for /simulate/slow delays; larger requests are clamped
pub const MAX_SLOW_DELAY_SECS: u64 = 30;

/// Status code used by /simulate/error when the `code` parameter is absent
/// or unparseable
pub const DEFAULT_ERROR_CODE: i64 = 500;

// =============================================================================
// Defaults and Strings
// =============================================================================

/// Placeholder for instance fields with no environment variable set
pub const UNKNOWN_VALUE: &str = "Unknown";

/// Listen port used when PORT is unset or unparseable
pub const DEFAULT_PORT: u16 = 8080;

/// Address the server binds to (all interfaces)
pub const LISTEN_HOST: &str = "0.0.0.0";

/// Default log filter when RUST_LOG is not set and DEBUG is off
pub const DEFAULT_LOG_FILTER: &str = "hello_api=info,tower_http=info";

/// Log filter applied when DEBUG=true and RUST_LOG is not set
pub const DEBUG_LOG_FILTER: &str = "hello_api=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Root configuration, assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment metadata echoed back by the API
    pub instance: InstanceConfig,
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Immutable deployment metadata for this instance.
///
/// Populated once at startup from `CLOUD_PROVIDER`, `REGION`, `ENVIRONMENT`,
/// `POD_NAME`, and `POD_IP`. Unset fields default to "Unknown", except
/// `pod_name` which falls back to the machine's hostname.
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    pub cloud_provider: String,
    pub region: String,
    pub environment: String,
    pub pod_name: String,
    pub pod_ip: String,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Raise the default filter to debug level (`DEBUG` env var)
    pub debug: bool,
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl LoggingConfig {
    /// Filter used when neither --log-level nor RUST_LOG is given.
    pub fn default_filter(&self) -> &'static str {
        if self.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unit tests pass closures over maps here instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let instance = InstanceConfig {
            cloud_provider: get("CLOUD_PROVIDER").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
            region: get("REGION").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
            pod_name: get("POD_NAME")
                .or_else(local_hostname)
                .unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
            pod_ip: get("POD_IP").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        };

        let http = HttpServerConfig {
            host: LISTEN_HOST.to_string(),
            // Unparseable PORT falls back to the default rather than failing
            port: get("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        };

        let logging = LoggingConfig {
            debug: get("DEBUG")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            format: get("LOG_FORMAT").unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
        };

        Self {
            instance,
            http,
            logging,
        }
    }
}

/// The machine's network hostname, if it can be read and is valid UTF-8.
pub fn local_hostname() -> Option<String> {
    hostname::get().ok().and_then(|h| h.into_string().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn instance_fields_default_to_unknown() {
        let config = config_from(&[]);
        assert_eq!(config.instance.cloud_provider, "Unknown");
        assert_eq!(config.instance.region, "Unknown");
        assert_eq!(config.instance.environment, "Unknown");
        assert_eq!(config.instance.pod_ip, "Unknown");
    }

    #[test]
    fn pod_name_falls_back_to_hostname() {
        let config = config_from(&[]);
        // Hostname lookup may legitimately fail in minimal containers,
        // in which case the placeholder is used.
        match local_hostname() {
            Some(hostname) => assert_eq!(config.instance.pod_name, hostname),
            None => assert_eq!(config.instance.pod_name, "Unknown"),
        }
    }

    #[test]
    fn env_values_override_defaults() {
        let config = config_from(&[
            ("CLOUD_PROVIDER", "Azure"),
            ("REGION", "westeurope"),
            ("ENVIRONMENT", "staging"),
            ("POD_NAME", "hello-api-7d4b"),
            ("POD_IP", "10.0.0.12"),
        ]);
        assert_eq!(config.instance.cloud_provider, "Azure");
        assert_eq!(config.instance.region, "westeurope");
        assert_eq!(config.instance.environment, "staging");
        assert_eq!(config.instance.pod_name, "hello-api-7d4b");
        assert_eq!(config.instance.pod_ip, "10.0.0.12");
    }

    #[test]
    fn port_defaults_and_falls_back_on_parse_failure() {
        assert_eq!(config_from(&[]).http.port, 8080);
        assert_eq!(config_from(&[("PORT", "9090")]).http.port, 9090);
        assert_eq!(config_from(&[("PORT", "not-a-port")]).http.port, 8080);
    }

    #[test]
    fn debug_flag_is_case_insensitive() {
        assert!(!config_from(&[]).logging.debug);
        assert!(config_from(&[("DEBUG", "true")]).logging.debug);
        assert!(config_from(&[("DEBUG", "TRUE")]).logging.debug);
        assert!(!config_from(&[("DEBUG", "yes")]).logging.debug);
    }

    #[test]
    fn debug_raises_default_filter() {
        assert_eq!(config_from(&[]).logging.default_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(
            config_from(&[("DEBUG", "true")]).logging.default_filter(),
            DEBUG_LOG_FILTER
        );
    }
}
