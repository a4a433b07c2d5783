//! Equipment state errors.
//!
//! [`LayoutError`] covers region configuration that cannot be turned into an
//! aggregate. [`IntegrityError`] reports a broken structural invariant found
//! by [`Equipment::check_integrity`](crate::state::Equipment::check_integrity).

use crate::error::{ErrorSeverity, StashError};
use crate::state::{CellAddress, ContainerName, ItemHandle, RegionId, SlotName};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutError {
    #[error("slot {0} declared more than once")]
    DuplicateSlot(SlotName),

    #[error("container {0} declared more than once")]
    DuplicateContainer(ContainerName),

    #[error("layout declares more than {max} slots")]
    TooManySlots { max: usize },

    #[error("layout declares more than {max} containers")]
    TooManyContainers { max: usize },

    #[error("slot {0} declares an empty allow-list")]
    EmptyAllowList(SlotName),

    #[error("container {0} has no sub-grids")]
    EmptyContainer(ContainerName),

    #[error("container {container} has more than {max} sub-grids")]
    TooManySubGrids { container: ContainerName, max: usize },

    #[error("container {container} has an invalid {width}x{height} sub-grid")]
    InvalidSubGrid {
        container: ContainerName,
        width: u8,
        height: u8,
    },

    #[error("container {container} chains a {found}-wide sub-grid onto a {expected}-wide one")]
    MismatchedWidth {
        container: ContainerName,
        expected: u8,
        found: u8,
    },

    #[error("container {container} is {height} rows high, more than {max}")]
    TooTall {
        container: ContainerName,
        height: u16,
        max: u8,
    },
}

impl StashError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::DuplicateSlot(_) => "LAYOUT_DUPLICATE_SLOT",
            LayoutError::DuplicateContainer(_) => "LAYOUT_DUPLICATE_CONTAINER",
            LayoutError::TooManySlots { .. } => "LAYOUT_TOO_MANY_SLOTS",
            LayoutError::TooManyContainers { .. } => "LAYOUT_TOO_MANY_CONTAINERS",
            LayoutError::EmptyAllowList(_) => "LAYOUT_EMPTY_ALLOW_LIST",
            LayoutError::EmptyContainer(_) => "LAYOUT_EMPTY_CONTAINER",
            LayoutError::TooManySubGrids { .. } => "LAYOUT_TOO_MANY_SUB_GRIDS",
            LayoutError::InvalidSubGrid { .. } => "LAYOUT_INVALID_SUB_GRID",
            LayoutError::MismatchedWidth { .. } => "LAYOUT_MISMATCHED_WIDTH",
            LayoutError::TooTall { .. } => "LAYOUT_TOO_TALL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrityError {
    #[error("{item} is present in more than one block ({first} and {second})")]
    DuplicateItem {
        item: ItemHandle,
        first: CellAddress,
        second: CellAddress,
    },

    #[error("{item} at {address} is missing from the catalog")]
    UnknownItem {
        item: ItemHandle,
        address: CellAddress,
    },

    #[error("{item} in {region} is not 1x1")]
    SlotFootprint { item: ItemHandle, region: RegionId },

    #[error("{item} anchored at {address} does not fit inside its sub-grid")]
    OutOfBounds {
        item: ItemHandle,
        address: CellAddress,
    },

    #[error("{address} should be covered by {expected} but holds {found:?}")]
    BlockMismatch {
        address: CellAddress,
        expected: ItemHandle,
        found: Option<ItemHandle>,
    },

    #[error("{address} references {item} outside of its block")]
    StrayCell {
        address: CellAddress,
        item: ItemHandle,
    },
}

impl StashError for IntegrityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            IntegrityError::UnknownItem { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            IntegrityError::DuplicateItem { .. } => "INTEGRITY_DUPLICATE_ITEM",
            IntegrityError::UnknownItem { .. } => "INTEGRITY_UNKNOWN_ITEM",
            IntegrityError::SlotFootprint { .. } => "INTEGRITY_SLOT_FOOTPRINT",
            IntegrityError::OutOfBounds { .. } => "INTEGRITY_OUT_OF_BOUNDS",
            IntegrityError::BlockMismatch { .. } => "INTEGRITY_BLOCK_MISMATCH",
            IntegrityError::StrayCell { .. } => "INTEGRITY_STRAY_CELL",
        }
    }
}
