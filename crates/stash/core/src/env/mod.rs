//! Traits describing read-only catalog data.
//!
//! The item catalog is consumed, never owned, by the engine. [`StashEnv`]
//! bundles it with the engine configuration so transitions receive everything
//! they need without hard coupling to concrete implementations.
mod error;
mod items;
mod snapshot;

pub use error::OracleError;
pub use items::{
    Footprint, ItemCategory, ItemDefinition, ItemOracle, SubCategory, SubCategorySet,
};
pub use snapshot::ItemsSnapshot;

use crate::config::StashConfig;

/// Read-only environment handed to every transition.
#[derive(Clone, Copy)]
pub struct StashEnv<'a> {
    items: &'a dyn ItemOracle,
    config: &'a StashConfig,
}

impl<'a> StashEnv<'a> {
    pub fn new(items: &'a dyn ItemOracle, config: &'a StashConfig) -> Self {
        Self { items, config }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn config(&self) -> &'a StashConfig {
        self.config
    }
}

impl core::fmt::Debug for StashEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StashEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
