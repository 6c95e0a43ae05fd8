use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::http::connection::Connection;

/// Binds the configured address and serves until `shutdown` resolves.
///
/// Failing to bind is the only error returned.
pub async fn run<F>(cfg: Arc<ServerConfig>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on http://{}", addr);
    info!(web_root = %cfg.web_root.display(), "Serving files");

    serve(listener, cfg, shutdown).await;
    Ok(())
}

/// Accept loop over an already bound listener.
///
/// Every connection runs on its own task; nothing caps how many run at
/// once. Finished handlers are reaped before the next accept. When
/// `shutdown` resolves the listener is closed and the loop waits for the
/// connections still in flight, returning how many there were.
pub async fn serve<F>(listener: TcpListener, cfg: Arc<ServerConfig>, shutdown: F) -> usize
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!("Shutting down server...");
                break;
            }

            // Reap finished handlers so the set does not grow without bound.
            Some(joined) = connections.join_next(), if !connections.is_empty() => {
                if let Err(e) = joined {
                    error!(error = %e, "Connection task failed");
                }
            }

            accepted = listener.accept() => {
                let (socket, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!(error = %e, "Error accepting client");
                        continue;
                    }
                };
                info!("Connection from {}", peer);

                let cfg = cfg.clone();
                connections.spawn(async move {
                    let conn = Connection::new(socket, cfg);
                    if let Err(e) = conn.run().await {
                        error!("Error handling client {}: {}", peer, e);
                    }
                });
            }
        }
    }

    drop(listener);

    let in_flight = connections.len();
    while let Some(joined) = connections.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "Connection task failed");
        }
    }

    info!(drained = in_flight, "Server stopped");
    in_flight
}
