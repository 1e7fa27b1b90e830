// Application state module
// Holds the loaded configuration and the shared telemetry RNG

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use super::types::Config;

/// Application state shared across connections
pub struct AppState {
    pub config: Config,
    /// Source of every random telemetry draw. Behind one lock so a fixed
    /// seed yields one reproducible stream across endpoints.
    pub rng: Mutex<StdRng>,
}

impl AppState {
    /// Create `AppState`, seeding the telemetry RNG from config
    pub fn new(config: Config) -> Self {
        let rng = match config.telemetry.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng: Mutex::new(rng),
        }
    }
}
