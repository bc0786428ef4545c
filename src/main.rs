use anyhow::Context;
use hathor_tg_wallet::{api::server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger (set RUST_LOG=debug for verbose output, RUST_LOG=info for normal)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    log::info!("Starting Hathor TG wallet server on {}", config.bind_address);
    server::start_server(config).await?;
    Ok(())
}
