use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gambit_service::{MoveService, ServiceConfig, router};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// HTTP chess move server.
#[derive(Debug, Parser)]
#[command(name = "gambit", version, about = "Chess move search over HTTP", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, env = "GAMBIT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "GAMBIT_PORT", default_value_t = 3000)]
    port: u16,

    /// Deepest search a request may ask for
    #[arg(long, env = "GAMBIT_MAX_DEPTH", default_value_t = 5)]
    max_depth: i32,

    /// Depth used when a request names none
    #[arg(long, env = "GAMBIT_DEFAULT_DEPTH", default_value_t = 3)]
    default_depth: i32,

    /// Think time budget per request, in seconds
    #[arg(long, env = "GAMBIT_TIME_BUDGET", default_value_t = 5.0)]
    time_budget: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let time_budget = Duration::try_from_secs_f64(args.time_budget)
        .with_context(|| format!("invalid time budget: {}", args.time_budget))?;
    let config = ServiceConfig {
        max_depth: args.max_depth,
        default_depth: args.default_depth,
        time_budget,
    };
    let service = MoveService::new(config);
    info!(config = ?service.config(), "gambit starting");

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, router(service)).await?;
    Ok(())
}
