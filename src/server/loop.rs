// Server loop module
// Accept loop with graceful shutdown

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long in-flight connections get to finish after shutdown is requested.
const SHUTDOWN_GRACE: std::time::Duration = std::time::Duration::from_secs(5);

/// Run the accept loop until a shutdown notification arrives.
///
/// Each accepted connection is served in its own task; the loop itself only
/// accepts and hands off. After shutdown, waits for in-flight connections
/// up to [`SHUTDOWN_GRACE`].
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown("Stopping accept loop");
                break;
            }
        }
    }

    drain_connections(&active_connections).await;
}

/// Wait briefly for in-flight connections before returning.
async fn drain_connections(active_connections: &AtomicUsize) {
    let deadline = tokio::time::Instant::now() + SHUTDOWN_GRACE;

    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace period elapsed with {} connection(s) still active",
                active_connections.load(Ordering::SeqCst)
            ));
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    logger::log_shutdown("All connections closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::listener::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_state() -> Arc<AppState> {
        let mut config = Config::load_from("nonexistent-config-for-tests").unwrap();
        config.telemetry.seed = Some(7);
        config.logging.access_log = false;
        Arc::new(AppState::new(config))
    }

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_serves_api_then_shuts_down() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let server = tokio::spawn(run(listener, test_state(), Arc::clone(&shutdown)));

        let reply = raw_request(
            addr,
            "GET /api/status HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(reply.starts_with("HTTP/1.1 200 OK"), "got: {reply}");
        assert!(reply.contains("DVT-A1B2C3"));
        assert!(reply.contains("cache-control: no-store") || reply.contains("Cache-Control: no-store"));

        shutdown.notify_one();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_static_path_is_404() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let server = tokio::spawn(run(listener, test_state(), Arc::clone(&shutdown)));

        let reply = raw_request(
            addr,
            "GET /definitely-not-here.css HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(reply.starts_with("HTTP/1.1 404"), "got: {reply}");

        shutdown.notify_one();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_cap_rejects_excess() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let mut config = Config::load_from("nonexistent-config-for-tests").unwrap();
        config.logging.access_log = false;
        config.performance.max_connections = Some(1);
        let state = Arc::new(AppState::new(config));

        let server = tokio::spawn(run(listener, state, Arc::clone(&shutdown)));

        // Held open without sending a request, so it stays counted as active.
        let held = tokio::net::TcpStream::connect(addr).await.unwrap();

        // The backlog is FIFO, so this one reaches the accept loop second and
        // is dropped at the cap before any bytes are written back.
        let mut rejected = tokio::net::TcpStream::connect(addr).await.unwrap();
        let mut buf = Vec::new();
        rejected.read_to_end(&mut buf).await.unwrap();
        assert!(buf.is_empty(), "over-cap connection got a response: {buf:?}");

        drop(held);
        shutdown.notify_one();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_post_over_the_wire() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let server = tokio::spawn(run(listener, test_state(), Arc::clone(&shutdown)));

        let reply = raw_request(
            addr,
            "POST /api/voltage HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(reply.starts_with("HTTP/1.1 405"), "got: {reply}");

        shutdown.notify_one();
        server.await.unwrap();
    }
}
