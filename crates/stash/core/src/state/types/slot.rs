use super::{ItemHandle, SlotName};
use crate::env::{SubCategory, SubCategorySet};

/// A single-cell equipment slot.
///
/// `allowed == None` means any 1×1 item may be placed here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlot {
    name: SlotName,
    allowed: Option<SubCategorySet>,
    item: Option<ItemHandle>,
}

impl EquipmentSlot {
    /// Creates an empty, unrestricted slot.
    pub fn new(name: SlotName) -> Self {
        Self {
            name,
            allowed: None,
            item: None,
        }
    }

    /// Creates an empty slot restricted to the given sub-categories.
    pub fn restricted(name: SlotName, allowed: SubCategorySet) -> Self {
        Self {
            name,
            allowed: Some(allowed),
            item: None,
        }
    }

    pub fn name(&self) -> SlotName {
        self.name
    }

    pub fn allowed(&self) -> Option<SubCategorySet> {
        self.allowed
    }

    pub fn item(&self) -> Option<ItemHandle> {
        self.item
    }

    /// Whether the allow-list admits `sub_category`.
    ///
    /// The wildcard passes every list, and a list containing the wildcard
    /// admits every sub-category.
    pub fn admits(&self, sub_category: SubCategory) -> bool {
        match self.allowed {
            None => true,
            Some(allowed) => {
                sub_category == SubCategory::Any
                    || allowed.contains(SubCategorySet::ANY)
                    || allowed.contains(sub_category.into())
            }
        }
    }

    pub(crate) fn set(&mut self, item: Option<ItemHandle>) -> Option<ItemHandle> {
        core::mem::replace(&mut self.item, item)
    }
}
