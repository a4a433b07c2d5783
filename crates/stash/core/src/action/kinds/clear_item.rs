//! Clear action: remove an item from every region.

use crate::action::StashTransition;
use crate::action::error::ClearError;
use crate::env::StashEnv;
use crate::state::{Equipment, ItemHandle};

/// Removes every cell reference to one item (consumed, sold, discarded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearItemAction {
    pub item: ItemHandle,
}

impl ClearItemAction {
    pub fn new(item: ItemHandle) -> Self {
        Self { item }
    }
}

impl StashTransition for ClearItemAction {
    type Error = ClearError;
    type Result = ();

    fn pre_validate(&self, equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        if !equipment.contains(self.item) {
            return Err(ClearError::NotPresent(self.item));
        }
        Ok(())
    }

    fn apply(&self, equipment: &mut Equipment, _env: &StashEnv<'_>) -> Result<(), ClearError> {
        equipment.clear_item(self.item);
        Ok(())
    }

    fn post_validate(&self, equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            !equipment.contains(self.item),
            "cleared item should not be referenced anywhere"
        );

        Ok(())
    }
}
