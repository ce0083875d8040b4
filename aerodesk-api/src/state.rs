use aerodesk_store::{LimitsConfig, SharedInventory};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<SharedInventory>,
    pub limits: LimitsConfig,
}

impl AppState {
    pub fn new(inventory: SharedInventory) -> Self {
        Self {
            inventory: Arc::new(inventory),
            limits: LimitsConfig::default(),
        }
    }

    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }
}
