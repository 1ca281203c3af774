use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vantage_uci::UciEngine;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the UCI protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("vantage starting");
    UciEngine::new().run()?;
    Ok(())
}
