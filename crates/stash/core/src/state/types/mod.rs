mod container;
mod item;
mod region;
mod slot;

pub use container::{Cell, GridContainer};
pub use item::ItemHandle;
pub use region::{CellAddress, ContainerName, Region, RegionId, SlotName};
pub use slot::EquipmentSlot;
