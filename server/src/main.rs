use anyhow::{Context, Result};
use trainspotter_server::ServerConfig;
use trainspotter_server::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG wins over LOG_FILTER
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::load().context("Failed to load configuration")?;

    trainspotter_server::run(config).await.context("Server error")?;

    Ok(())
}
