use std::sync::Arc;

use webroot_server::config::ServerConfig;
use webroot_server::server::{listener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = ServerConfig::load()?;
    cfg.ensure_web_root()?;

    tracing::info!("Type 'q' and Enter to stop the server");
    listener::run(Arc::new(cfg), signal::shutdown_signal()).await
}
