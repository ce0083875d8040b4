pub mod app_config;
pub mod events;
pub mod shared;

pub use app_config::{Config, LimitsConfig};
pub use events::{SeatChange, SeatChangedEvent, SeatEventBus};
pub use shared::SharedInventory;

use aerodesk_core::{Inventory, InventoryError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid fleet configuration: {0}")]
    Fleet(#[from] InventoryError),
}

/// Load configuration and seed the inventory it describes.
pub fn bootstrap() -> Result<(Config, Inventory), StoreError> {
    let config = Config::load()?;
    let inventory = config.seed_inventory()?;
    tracing::info!("Seeded {} flights", inventory.len());
    Ok((config, inventory))
}
