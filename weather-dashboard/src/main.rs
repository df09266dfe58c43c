//! Binary crate for the `weather-dashboard` terminal client.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Painting the dashboard, full-screen or as plain text

use clap::Parser;

mod cli;
mod logging;
mod plain;
mod tui;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
