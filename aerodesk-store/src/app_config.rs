use aerodesk_core::{Flight, Inventory, InventoryResult};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub fleet: Vec<FlightConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EventsConfig {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize { 100 }

/// Bounds on flights created at runtime.
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_max_capacity() -> u32 { 1000 }

/// A flight seeded into the inventory at startup.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FlightConfig {
    pub number: String,
    pub origin: String,
    pub destination: String,
    pub capacity: u32,
}

impl From<&FlightConfig> for Flight {
    fn from(cfg: &FlightConfig) -> Self {
        Flight::new(cfg.number.clone(), cfg.origin.clone(), cfg.destination.clone(), cfg.capacity)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load `default`, then `{RUN_MODE}`, then `local` from `dir`, then `AERODESK__*` env vars.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::from(dir.join("default")))
            // optional per-environment overrides
            .add_source(config::File::from(dir.join(&run_mode)).required(false))
            // not checked in
            .add_source(config::File::from(dir.join("local")).required(false))
            // e.g. `AERODESK__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("AERODESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build the startup inventory from the configured fleet.
    pub fn seed_inventory(&self) -> InventoryResult<Inventory> {
        Inventory::with_flights(self.fleet.iter().map(Flight::from))
    }
}
