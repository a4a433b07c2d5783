//! Place action: put a new item into free cells.

use crate::action::StashTransition;
use crate::env::StashEnv;
use crate::placement::PlaceError;
use crate::state::{CellAddress, Equipment, ItemHandle};

/// Stores an item that is not yet in the aggregate at a chosen address.
///
/// Never displaces anything; occupied targets are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceItemAction {
    pub item: ItemHandle,
    pub address: CellAddress,
}

impl PlaceItemAction {
    pub fn new(item: ItemHandle, address: CellAddress) -> Self {
        Self { item, address }
    }
}

impl StashTransition for PlaceItemAction {
    type Error = PlaceError;
    type Result = CellAddress;

    fn pre_validate(&self, equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        match equipment.locate(self.item) {
            Some(at) => Err(PlaceError::AlreadyPresent {
                item: self.item,
                at,
            }),
            None => Ok(()),
        }
    }

    fn apply(&self, equipment: &mut Equipment, env: &StashEnv<'_>) -> Result<CellAddress, PlaceError> {
        *equipment = equipment.place(env.items(), self.item, self.address)?;
        Ok(self.address)
    }

    fn post_validate(&self, equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        debug_assert_eq!(
            equipment.anchor_at(self.address),
            Some(self.item),
            "placed item should anchor at the requested address"
        );

        Ok(())
    }
}
