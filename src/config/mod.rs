// Configuration module entry point
// Layered loading: built-in defaults, optional TOML file, environment overrides

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AssetsConfig, Config};

impl Config {
    /// Load configuration from the default `alertovolt.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("alertovolt")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key has a built-in default matching the
    /// mock server's out-of-the-box behavior. Environment variables win over
    /// the file, e.g. `ALERTOVOLT_SERVER__PORT=8080`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("ALERTOVOLT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.dev_mode", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "AlertoVolt/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Whether per-request access logging is active. Dev mode forces it on.
    pub fn access_log_enabled(&self) -> bool {
        self.logging.access_log || self.server.dev_mode
    }
}
