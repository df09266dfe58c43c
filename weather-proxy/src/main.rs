//! Binary crate for the `weather-proxy` server.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use weather_core::{Config, provider_from_config};
use weather_proxy::AppState;

/// Relay `GET /api?q=<city>` to the upstream weather provider.
#[derive(Debug, Parser)]
#[command(name = "weather-proxy", version, about = "Weather API proxy")]
struct Args {
    /// Config file to read instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. "0.0.0.0:3000".
    #[arg(long)]
    listen: Option<String>,

    /// Upstream endpoint the city is forwarded to.
    #[arg(long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(listen) = args.listen {
        config.proxy.listen = listen;
    }
    if let Some(upstream) = args.upstream {
        config.proxy.upstream_url = upstream;
    }

    let provider = provider_from_config(&config.proxy)?;
    tracing::info!(upstream = %config.proxy.upstream_url, "upstream provider configured");

    let listener = TcpListener::bind(&config.proxy.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.proxy.listen))?;

    weather_proxy::serve(listener, AppState::from(provider)).await
}
