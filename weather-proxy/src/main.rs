//! Binary crate for the `weather-proxy` HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and environment configuration
//! - Serving `GET /weather` over axum
//! - Log output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cmd.run().await
}
