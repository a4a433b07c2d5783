//! Stow action: put a new item wherever it first fits.

use crate::action::StashTransition;
use crate::env::StashEnv;
use crate::placement::PlaceError;
use crate::state::{CellAddress, Equipment, ItemHandle};

/// Stores an item at the first free address, scanning slots before
/// containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StowItemAction {
    pub item: ItemHandle,
}

impl StowItemAction {
    pub fn new(item: ItemHandle) -> Self {
        Self { item }
    }
}

impl StashTransition for StowItemAction {
    type Error = PlaceError;
    type Result = CellAddress;

    fn apply(&self, equipment: &mut Equipment, env: &StashEnv<'_>) -> Result<CellAddress, PlaceError> {
        let (next, address) = equipment.stow(env.items(), self.item)?;
        *equipment = next;
        Ok(address)
    }
}
