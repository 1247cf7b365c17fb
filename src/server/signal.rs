// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

/// Start the shutdown signal listener (Unix)
///
/// Spawns a background task that notifies `shutdown` on the first
/// SIGTERM or SIGINT.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => tracing::info!("[SIGNAL] SIGTERM received"),
            _ = sigint.recv() => tracing::info!("[SIGNAL] SIGINT received"),
        }
        shutdown.notify_one();
    });

    Ok(())
}

/// Start the shutdown signal listener (non-Unix, Ctrl+C only)
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("[SIGNAL] Ctrl+C received");
                shutdown.notify_one();
            }
            Err(e) => tracing::error!("[SIGNAL] Failed to listen for Ctrl+C: {e}"),
        }
    });

    Ok(())
}
