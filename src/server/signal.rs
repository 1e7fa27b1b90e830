// Signal handling module
//
// SIGINT (Ctrl+C) and SIGTERM both trigger graceful shutdown. Nothing else
// is handled; the mock server has no reload-in-place story.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn the signal listener task (Unix)
#[cfg(unix)]
pub fn spawn_shutdown_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                crate::logger::log_shutdown("SIGTERM received");
            }
            _ = sigint.recv() => {
                crate::logger::log_shutdown("SIGINT received (Ctrl+C)");
            }
        }

        shutdown.notify_one();
    });
}

/// Spawn the signal listener task (non-Unix: Ctrl+C only)
#[cfg(not(unix))]
pub fn spawn_shutdown_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_shutdown("Ctrl+C received");
            shutdown.notify_one();
        }
    });
}
