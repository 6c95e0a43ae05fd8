use tokio::sync::oneshot;
use tracing::{info, warn};

/// Resolves when the operator asks the server to stop: Ctrl-C, SIGTERM on
/// unix, or `q` typed on standard input.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutdown signal received"),
        _ = terminate => info!("Terminate signal received"),
        _ = console_quit() => info!("Stop requested from console"),
    }
}

/// Waits for a line reading `q` on standard input.
///
/// Stdin is read on a detached OS thread so a pending read never holds up
/// runtime shutdown. Never resolves if stdin closes first, so a detached
/// process keeps running.
pub async fn console_quit() {
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) if is_quit_command(&line) => {
                    let _ = tx.send(());
                    return;
                }
                Ok(_) => continue,
                Err(_) => return,
            }
        }
    });

    if rx.await.is_err() {
        std::future::pending::<()>().await;
    }
}

pub fn is_quit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}
