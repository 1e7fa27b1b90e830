//! Console logger
//!
//! Plain stdout/stderr logging with `[Tag]` prefixes. The mock server is a
//! development tool, so the startup banner doubles as usage instructions.

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_startup_banner(addr: &SocketAddr, config: &Config) {
    println!("{}", startup_banner(addr, config));
}

/// Render the startup banner. Setup instructions follow the configured
/// webroot and index document, not fixed file names.
fn startup_banner(addr: &SocketAddr, config: &Config) -> String {
    let rule = "=".repeat(50);
    let mut banner = format!("\n{rule}\nALERTOVOLT MOCK SERVER\n{rule}\n");
    banner.push_str(&format!(
        "\n1. Put {} and its assets in '{}/'\n",
        config.assets.index, config.assets.root
    ));
    banner.push_str(&format!("2. Open your browser to: http://{addr}/\n"));
    banner.push_str("\nAPI endpoints:\n");
    banner.push_str(&format!("  http://{addr}/api/voltage\n"));
    banner.push_str(&format!("  http://{addr}/api/alerts\n"));
    banner.push_str(&format!("  http://{addr}/api/status\n"));
    banner.push_str(&format!("\nLog level: {}\n", config.logging.level));
    if let Some(workers) = config.server.workers {
        banner.push_str(&format!("Worker threads: {workers}\n"));
    }
    if let Some(seed) = config.telemetry.seed {
        banner.push_str(&format!("Telemetry seed: {seed} (reproducible run)\n"));
    }
    if config.server.dev_mode {
        banner.push_str("Dev mode: ON (verbose errors in responses)\n");
    }
    banner.push_str("\nPress CTRL+C to stop the server\n");
    banner.push_str(&format!("{rule}\n"));
    banner
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    println!("[API] {method} {path} - {status}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_shutdown(reason: &str) {
    println!("\n[Shutdown] {reason}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_names_configured_index() {
        let mut config = Config::load_from("nonexistent-config-for-tests").unwrap();
        config.assets.root = "www".to_string();
        config.assets.index = "panel.html".to_string();

        let addr: SocketAddr = "127.0.0.1:5000".parse().unwrap();
        let banner = startup_banner(&addr, &config);

        assert!(banner.contains("ALERTOVOLT MOCK SERVER"));
        assert!(banner.contains("Put panel.html and its assets in 'www/'"));
        assert!(banner.contains("http://127.0.0.1:5000/api/voltage"));
        assert!(!banner.contains("dashboard.html"));
    }

    #[test]
    fn test_banner_optional_lines() {
        let mut config = Config::load_from("nonexistent-config-for-tests").unwrap();
        config.server.workers = None;
        config.server.dev_mode = false;
        config.telemetry.seed = None;
        let addr: SocketAddr = "127.0.0.1:5000".parse().unwrap();

        let plain = startup_banner(&addr, &config);
        assert!(!plain.contains("Telemetry seed"));
        assert!(!plain.contains("Dev mode"));

        config.telemetry.seed = Some(42);
        config.server.dev_mode = true;
        let verbose = startup_banner(&addr, &config);
        assert!(verbose.contains("Telemetry seed: 42"));
        assert!(verbose.contains("Dev mode: ON"));
    }
}
