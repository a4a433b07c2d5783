//! Region naming and cell addressing.
//!
//! Every storage cell an actor owns is addressed by a [`CellAddress`]: the
//! region it belongs to plus a row-major offset inside that region. Slots only
//! have offset 0. Container offsets run contiguously across chained sub-grids,
//! so callers never reconstruct per-block indices themselves.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use super::{Cell, EquipmentSlot, GridContainer, ItemHandle};

/// Named single-cell equipment slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotName {
    Helmet,
    Armor,
    Primary,
    Secondary,
    Module,
    #[strum(serialize = "pocket0")]
    #[cfg_attr(feature = "serde", serde(rename = "pocket0"))]
    Pocket0,
    #[strum(serialize = "pocket1")]
    #[cfg_attr(feature = "serde", serde(rename = "pocket1"))]
    Pocket1,
    #[strum(serialize = "pocket2")]
    #[cfg_attr(feature = "serde", serde(rename = "pocket2"))]
    Pocket2,
    #[strum(serialize = "pocket3")]
    #[cfg_attr(feature = "serde", serde(rename = "pocket3"))]
    Pocket3,
}

/// Named multi-cell grid containers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContainerName {
    Rig,
    Bag,
    Backpack,
}

/// Tagged region identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RegionId {
    Slot(SlotName),
    Container(ContainerName),
}

impl core::fmt::Display for RegionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegionId::Slot(name) => write!(f, "slot:{name}"),
            RegionId::Container(name) => write!(f, "container:{name}"),
        }
    }
}

impl From<SlotName> for RegionId {
    fn from(name: SlotName) -> Self {
        RegionId::Slot(name)
    }
}

impl From<ContainerName> for RegionId {
    fn from(name: ContainerName) -> Self {
        RegionId::Container(name)
    }
}

/// A single cell inside one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    pub region: RegionId,
    pub cell: u16,
}

impl CellAddress {
    pub const fn new(region: RegionId, cell: u16) -> Self {
        Self { region, cell }
    }

    /// Address of an equipment slot's only cell.
    pub const fn slot(name: SlotName) -> Self {
        Self::new(RegionId::Slot(name), 0)
    }

    pub const fn container(name: ContainerName, cell: u16) -> Self {
        Self::new(RegionId::Container(name), cell)
    }
}

impl core::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}[{}]", self.region, self.cell)
    }
}

/// Borrowed view over either region topology.
#[derive(Clone, Copy, Debug)]
pub enum Region<'a> {
    Slot(&'a EquipmentSlot),
    Container(&'a GridContainer),
}

impl<'a> Region<'a> {
    pub fn id(&self) -> RegionId {
        match self {
            Region::Slot(slot) => RegionId::Slot(slot.name()),
            Region::Container(container) => RegionId::Container(container.name()),
        }
    }

    /// Number of addressable cells.
    pub fn len(&self) -> u16 {
        match self {
            Region::Slot(_) => 1,
            Region::Container(container) => container.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Region::Slot(slot) => slot.item().is_none(),
            Region::Container(container) => container.is_empty(),
        }
    }

    pub fn contains_cell(&self, cell: u16) -> bool {
        cell < self.len()
    }

    /// Returns the cell state at `cell`, or `None` when out of range.
    ///
    /// An occupied slot reports its item as an anchor.
    pub fn cell(&self, cell: u16) -> Option<Cell> {
        match self {
            Region::Slot(slot) => {
                (cell == 0).then(|| slot.item().map_or(Cell::Empty, Cell::Anchor))
            }
            Region::Container(container) => container.cell(cell),
        }
    }

    /// Whether any cell of this region references `item`.
    pub fn references(&self, item: ItemHandle) -> bool {
        match self {
            Region::Slot(slot) => slot.item() == Some(item),
            Region::Container(container) => container.references(item),
        }
    }

    /// Anchor offset of `item` inside this region.
    pub fn anchor_of(&self, item: ItemHandle) -> Option<u16> {
        match self {
            Region::Slot(slot) => (slot.item() == Some(item)).then_some(0),
            Region::Container(container) => container.anchor_of(item),
        }
    }
}
