//! Equipment layout loader.

use std::path::Path;

use stash_core::{Equipment, LayoutSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for equipment layouts from TOML files.
///
/// ```toml
/// [[slots]]
/// name = "helmet"
/// allowed = ["helmet"]
///
/// [[containers]]
/// name = "backpack"
/// sub_grids = [{ width = 2, height = 2 }, { width = 2, height = 1 }]
/// ```
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout and check that it resolves into an aggregate.
    pub fn load(path: &Path) -> LoadResult<LayoutSpec> {
        let content = read_file(path)?;
        let layout: LayoutSpec = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout TOML: {}", e))?;

        Equipment::from_layout(&layout)
            .map_err(|e| anyhow::anyhow!("Invalid layout {}: {}", path.display(), e))?;

        Ok(layout)
    }
}
