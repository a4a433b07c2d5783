//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stash_core::{ItemDefinition, ItemsSnapshot};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }

    /// Load and validate a catalog into an in-memory oracle.
    ///
    /// Rejects duplicate handles and footprints the engine cannot place.
    pub fn load_snapshot(path: &Path) -> LoadResult<ItemsSnapshot> {
        let items = Self::load(path)?;
        ItemsSnapshot::from_definitions(items).map_err(|e| {
            anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e)
        })
    }
}
