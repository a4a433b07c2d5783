//! Engine configuration loader.

use std::path::Path;

use stash_core::StashConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`StashConfig::default`].
    pub fn load(path: &Path) -> LoadResult<StashConfig> {
        let content = read_file(path)?;
        let config: StashConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
