//! Equipment state: regions, cells and the per-actor aggregate.
//!
//! Everything here is plain data. Placement rules live in
//! [`crate::placement`] and relocation in [`crate::action`].
mod equipment;
mod error;
mod integrity;
mod layout;
mod types;

pub use equipment::Equipment;
pub use error::{IntegrityError, LayoutError};
pub use layout::{ContainerSpec, LayoutSpec, SlotSpec, SubGridSpec};
pub use types::{
    Cell, CellAddress, ContainerName, EquipmentSlot, GridContainer, ItemHandle, Region, RegionId,
    SlotName,
};
