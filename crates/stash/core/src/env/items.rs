use crate::config::StashConfig;
use crate::state::ItemHandle;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Static catalog entry for an item.
///
/// # Stacking
///
/// All items carry a `max_stack` value; `max_stack == 1` means the item does
/// not stack. Stack counts are not tracked by the placement engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    /// Content key, e.g. `"security_helmet"`.
    pub key: String,
    pub category: ItemCategory,
    pub sub_category: SubCategory,
    pub footprint: Footprint,
    pub value: u32,
    pub max_stack: u16,
}

impl ItemDefinition {
    pub fn new(
        handle: ItemHandle,
        key: impl Into<String>,
        category: ItemCategory,
        sub_category: SubCategory,
        footprint: Footprint,
    ) -> Self {
        Self {
            handle,
            key: key.into(),
            category,
            sub_category,
            footprint,
            value: 0,
            max_stack: 1,
        }
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    pub fn with_max_stack(mut self, max_stack: u16) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }
}

/// Width × height occupancy in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: u8,
    pub height: u8,
}

impl Footprint {
    pub const SINGLE: Self = Self::new(1, 1);

    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    pub const fn is_single(&self) -> bool {
        self.width == 1 && self.height == 1
    }

    pub const fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether both sides are in `1..=MAX_FOOTPRINT_SIDE`.
    pub const fn is_valid(&self) -> bool {
        self.width >= 1
            && self.height >= 1
            && self.width <= StashConfig::MAX_FOOTPRINT_SIDE
            && self.height <= StashConfig::MAX_FOOTPRINT_SIDE
    }
}

impl core::fmt::Display for Footprint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemCategory {
    Consumable,
    Gear,
    Weapon,
    Attachment,
    Valuable,
    Key,
}

/// Sub-category used only for slot allow-list matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubCategory {
    Helmet,
    Armor,
    Weapon,
    Module,
    Rig,
    Bag,
    Backpack,
    Medical,
    Ammo,
    Misc,
    /// Wildcard: passes every allow-list.
    Any,
}

bitflags::bitflags! {
    /// Set of sub-categories a slot admits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SubCategorySet: u16 {
        const HELMET = 1 << 0;
        const ARMOR = 1 << 1;
        const WEAPON = 1 << 2;
        const MODULE = 1 << 3;
        const RIG = 1 << 4;
        const BAG = 1 << 5;
        const BACKPACK = 1 << 6;
        const MEDICAL = 1 << 7;
        const AMMO = 1 << 8;
        const MISC = 1 << 9;
        const ANY = 1 << 10;
    }
}

impl From<SubCategory> for SubCategorySet {
    fn from(sub_category: SubCategory) -> Self {
        match sub_category {
            SubCategory::Helmet => Self::HELMET,
            SubCategory::Armor => Self::ARMOR,
            SubCategory::Weapon => Self::WEAPON,
            SubCategory::Module => Self::MODULE,
            SubCategory::Rig => Self::RIG,
            SubCategory::Bag => Self::BAG,
            SubCategory::Backpack => Self::BACKPACK,
            SubCategory::Medical => Self::MEDICAL,
            SubCategory::Ammo => Self::AMMO,
            SubCategory::Misc => Self::MISC,
            SubCategory::Any => Self::ANY,
        }
    }
}

impl FromIterator<SubCategory> for SubCategorySet {
    fn from_iter<T: IntoIterator<Item = SubCategory>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, sub_category| set | sub_category.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_validity() {
        assert!(Footprint::SINGLE.is_single());
        assert_eq!(Footprint::new(2, 2).cell_count(), 4);
        assert!(Footprint::new(2, 1).is_valid());
        assert!(!Footprint::new(0, 1).is_valid());
        assert!(!Footprint::new(1, StashConfig::MAX_FOOTPRINT_SIDE + 1).is_valid());
    }

    #[test]
    fn sub_category_set_collects() {
        let set: SubCategorySet = [SubCategory::Helmet, SubCategory::Armor]
            .into_iter()
            .collect();
        assert!(set.contains(SubCategorySet::HELMET));
        assert!(set.contains(SubCategorySet::ARMOR));
        assert!(!set.contains(SubCategorySet::WEAPON));
    }

    #[test]
    fn stackability_follows_max_stack() {
        let bandage = ItemDefinition::new(
            ItemHandle(3),
            "bandage",
            ItemCategory::Consumable,
            SubCategory::Medical,
            Footprint::SINGLE,
        )
        .with_max_stack(5);
        assert!(bandage.is_stackable());
        assert!(!bandage.clone().with_max_stack(1).is_stackable());
    }
}
