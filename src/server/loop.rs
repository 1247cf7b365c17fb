// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinSet;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Run the accept loop
///
/// Once `shutdown` is notified the listener is closed and the loop waits for
/// accepted connections to finish, at most `Config::connection_timeout`.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let mut tasks = JoinSet::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections, &mut tasks);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            // Reap finished connection tasks so the set does not grow
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}

            _ = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    drop(listener);
    drain_connections(tasks, state.config.connection_timeout()).await;
    Ok(())
}

/// Wait for in-flight connections, aborting whatever is left after `limit`
async fn drain_connections(mut tasks: JoinSet<()>, limit: std::time::Duration) {
    if tasks.is_empty() {
        return;
    }
    logger::log_draining(tasks.len());

    let finished = tokio::time::timeout(limit, async {
        while tasks.join_next().await.is_some() {}
    })
    .await;

    if finished.is_err() {
        logger::log_warning(&format!(
            "{} connections still open after {} seconds, aborting",
            tasks.len(),
            limit.as_secs()
        ));
        tasks.shutdown().await;
    }
}
