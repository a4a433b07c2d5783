//! Content factory for building engine inputs from data files.

use std::path::{Path, PathBuf};

use stash_core::{ItemDefinition, ItemsSnapshot, LayoutSpec, StashConfig};

use crate::loaders::{ConfigLoader, ItemLoader, LayoutLoader, LoadResult};

/// Content factory that loads all stash content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── layout.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<StashConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the equipment layout from `layout.toml`.
    pub fn load_layout(&self) -> LoadResult<LayoutSpec> {
        let path = self.data_dir.join("layout.toml");
        LayoutLoader::load(&path)
    }

    /// Load raw item definitions from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load `items.ron` into a validated catalog oracle.
    pub fn load_catalog(&self) -> LoadResult<ItemsSnapshot> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load_snapshot(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
