//! coursekit CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coursekit::cli::Cli;
use coursekit::config;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG wins over the configured filter; a broken config surfaces
    // later, when a command asks for it
    let default_filter = config::config()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let cli = Cli::parse();
    cli.execute().await
}
