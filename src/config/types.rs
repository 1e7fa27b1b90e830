// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    /// Dashboard asset serving
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Telemetry generation tuning
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Development mode: echoes error detail in 500 bodies and forces
    /// access logging on. Off unless explicitly enabled.
    pub dev_mode: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory the dashboard files are served from
    #[serde(default = "default_assets_root")]
    pub root: String,
    /// File served for the root path
    #[serde(default = "default_assets_index")]
    pub index: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_assets_root() -> String {
    "static".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_assets_index() -> String {
    "dashboard.html".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
            index: default_assets_index(),
        }
    }
}

/// Telemetry generation configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelemetryConfig {
    /// Fixed RNG seed for reproducible runs. Unset means seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}
