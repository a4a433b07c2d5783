//! Region configuration supplied at actor creation.
//!
//! A [`LayoutSpec`] lists the equipment slots (with optional allow-lists) and
//! the grid containers (as chained sub-grids) an actor owns. It is resolved
//! once into an empty [`Equipment`](crate::state::Equipment) aggregate.

use crate::env::SubCategory;
use crate::state::{ContainerName, SlotName};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Vec<SlotSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub containers: Vec<ContainerSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSpec {
    pub name: SlotName,
    /// `None` leaves the slot unrestricted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed: Option<Vec<SubCategory>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerSpec {
    pub name: ContainerName,
    /// Sub-grids stacked top to bottom; all must share one width.
    pub sub_grids: Vec<SubGridSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubGridSpec {
    pub width: u8,
    pub height: u8,
}

impl SubGridSpec {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }
}

impl LayoutSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unrestricted slot.
    pub fn slot(mut self, name: SlotName) -> Self {
        self.slots.push(SlotSpec {
            name,
            allowed: None,
        });
        self
    }

    /// Adds a slot restricted to `allowed`.
    pub fn restricted_slot(
        mut self,
        name: SlotName,
        allowed: impl IntoIterator<Item = SubCategory>,
    ) -> Self {
        self.slots.push(SlotSpec {
            name,
            allowed: Some(allowed.into_iter().collect()),
        });
        self
    }

    /// Adds a container made of the given `(width, height)` sub-grids.
    pub fn container(mut self, name: ContainerName, sub_grids: &[(u8, u8)]) -> Self {
        self.containers.push(ContainerSpec {
            name,
            sub_grids: sub_grids
                .iter()
                .map(|&(width, height)| SubGridSpec::new(width, height))
                .collect(),
        });
        self
    }

    /// Default operator loadout: restricted gear slots, four open pockets,
    /// a 2×2 rig, a 2×2 bag and a 2×2 + 2×1 backpack.
    pub fn standard() -> Self {
        Self::new()
            .restricted_slot(SlotName::Helmet, [SubCategory::Helmet])
            .restricted_slot(SlotName::Armor, [SubCategory::Armor])
            .restricted_slot(SlotName::Primary, [SubCategory::Weapon])
            .restricted_slot(SlotName::Secondary, [SubCategory::Weapon])
            .restricted_slot(SlotName::Module, [SubCategory::Module])
            .slot(SlotName::Pocket0)
            .slot(SlotName::Pocket1)
            .slot(SlotName::Pocket2)
            .slot(SlotName::Pocket3)
            .container(ContainerName::Rig, &[(2, 2)])
            .container(ContainerName::Bag, &[(2, 2)])
            .container(ContainerName::Backpack, &[(2, 2), (2, 1)])
    }
}
