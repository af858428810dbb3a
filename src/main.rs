//! hello-api: a multi-cloud demonstration API.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from environment variables, sets up the Axum router with
//! all routes, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_api::config::AppConfig;
use hello_api::http::start_server;
use hello_api::routes::create_router;
use hello_api::state::AppState;

/// hello-api: a multi-cloud demonstration API
#[derive(Parser, Debug)]
#[command(name = "hello-api", version, about)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "hello_api=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from the environment
    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > DEBUG-derived default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.logging.default_filter().to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(port = config.http.port, "Starting hello-api");
    tracing::info!(
        cloud = %config.instance.cloud_provider,
        region = %config.instance.region,
        environment = %config.instance.environment,
        pod_name = %config.instance.pod_name,
        "Instance configuration loaded"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
