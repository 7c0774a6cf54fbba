//! OS signal handling for graceful shutdown.
//!
//! SIGINT (Ctrl+C) and SIGTERM are the only shutdown triggers. The first one
//! flips a `watch` channel to `true`; later signals are ignored.

use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

/// Spawn a task that waits for SIGINT or SIGTERM and then requests shutdown.
///
/// Must be called from within a tokio runtime.
pub fn signal_listener() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received");
        let _ = tx.send(true);
        // Hold the sender so receivers keep reading `true` instead of a closed channel.
        tx.closed().await;
    });
    rx
}

/// Resolve on the first SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        tokio::select! {
            () = ctrl_c() => {},
            () = terminate() => {},
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c().await;
    }
}

async fn ctrl_c() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(?err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            term.recv().await;
        }
        Err(err) => {
            warn!(?err, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}
