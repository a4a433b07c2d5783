//! In-memory item catalog snapshot.
//!
//! [`ItemsSnapshot`] captures a full catalog in a deterministic `BTreeMap` and
//! implements [`ItemOracle`] directly, so tests, loaders and the runtime share
//! one adapter.

use std::collections::BTreeMap;

use super::{ItemDefinition, ItemOracle, OracleError};
use crate::state::ItemHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsSnapshot {
    items: BTreeMap<ItemHandle, ItemDefinition>,
}

impl ItemsSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot, rejecting duplicate handles and unsupported footprints.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, OracleError> {
        let mut snapshot = Self::empty();
        for definition in definitions {
            snapshot.insert(definition)?;
        }
        Ok(snapshot)
    }

    /// Creates an items snapshot from any other oracle.
    pub fn from_oracle(oracle: &dyn ItemOracle) -> Result<Self, OracleError> {
        Self::from_definitions(oracle.all_definitions())
    }

    pub fn insert(&mut self, definition: ItemDefinition) -> Result<(), OracleError> {
        if !definition.footprint.is_valid() {
            return Err(OracleError::InvalidFootprint {
                handle: definition.handle,
                footprint: definition.footprint,
            });
        }
        if self.items.contains_key(&definition.handle) {
            return Err(OracleError::DuplicateHandle(definition.handle));
        }
        self.items.insert(definition.handle, definition);
        Ok(())
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.get(&handle)
    }

    /// Looks an item up by its content key.
    pub fn by_key(&self, key: &str) -> Option<&ItemDefinition> {
        self.items.values().find(|definition| definition.key == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemsSnapshot {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.items.get(&handle).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.items.values().cloned().collect()
    }
}
