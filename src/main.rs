//! healthz-server entry point.
//!
//! Initializes tracing, reads the listen port from `PORT`, and serves until a
//! termination signal has been handled and all connections have drained.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthz_server::config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER};
use healthz_server::http::start_server;
use healthz_server::{AppState, HealthState};

/// healthz-server: greeting, health check and crash endpoints
#[derive(Parser, Debug)]
#[command(name = "healthz-server", version, about)]
struct Args {
    /// Log level filter (e.g., "healthz_server=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match args.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    let config = ServerConfig::from_env();
    let state = AppState::new(HealthState::new());

    start_server(&config, state).await?;

    Ok(())
}
