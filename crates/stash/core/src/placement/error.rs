//! Placement errors.

use crate::env::{Footprint, SubCategory};
use crate::error::{ErrorContext, ErrorSeverity, StashError};
use crate::state::{CellAddress, ItemHandle, RegionId, SlotName};

/// Why a footprint does not fit inside a region's geometry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundsError {
    #[error("anchor {anchor} is outside a region of {len} cells")]
    AnchorOutOfRange { anchor: u16, len: u16 },

    #[error("{footprint} footprint at column {column}, row {row} overflows a {width}x{height} grid")]
    Overflow {
        footprint: Footprint,
        column: u8,
        row: u8,
        width: u8,
        height: u8,
    },

    #[error("{footprint} footprint at row {row} crosses a sub-grid seam")]
    CrossesSubGrid { footprint: Footprint, row: u8 },

    #[error("{footprint} footprint is not supported")]
    UnsupportedFootprint { footprint: Footprint },
}

/// Why an item is not legal at a region/anchor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementError {
    #[error("slot {slot} only holds 1x1 items, got {footprint}")]
    FootprintNotSingle { slot: SlotName, footprint: Footprint },

    #[error("slot {slot} does not accept {sub_category:?}")]
    CategoryNotAllowed {
        slot: SlotName,
        sub_category: SubCategory,
    },

    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

impl StashError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PlacementError::Bounds(BoundsError::AnchorOutOfRange { .. }) => {
                ErrorSeverity::Validation
            }
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlacementError::FootprintNotSingle { .. } => "PLACEMENT_FOOTPRINT_NOT_SINGLE",
            PlacementError::CategoryNotAllowed { .. } => "PLACEMENT_CATEGORY_NOT_ALLOWED",
            PlacementError::Bounds(BoundsError::AnchorOutOfRange { .. }) => {
                "PLACEMENT_ANCHOR_OUT_OF_RANGE"
            }
            PlacementError::Bounds(BoundsError::Overflow { .. }) => "PLACEMENT_OVERFLOW",
            PlacementError::Bounds(BoundsError::CrossesSubGrid { .. }) => {
                "PLACEMENT_CROSSES_SUB_GRID"
            }
            PlacementError::Bounds(BoundsError::UnsupportedFootprint { .. }) => {
                "PLACEMENT_UNSUPPORTED_FOOTPRINT"
            }
        }
    }
}

/// Errors from putting a new item into the aggregate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceError {
    #[error("item {0} is not in the catalog")]
    ItemNotFound(ItemHandle),

    #[error("item {item} is already stored at {at}")]
    AlreadyPresent { item: ItemHandle, at: CellAddress },

    #[error("region {0} is not part of this equipment")]
    UnknownRegion(RegionId),

    #[error("{address} is occupied by {by}")]
    Occupied {
        address: CellAddress,
        by: ItemHandle,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    #[error("cannot place at {address}: {error}")]
    Placement {
        address: CellAddress,
        #[source]
        error: PlacementError,
    },

    #[error("no free space for item {0}")]
    NoSpace(ItemHandle),
}

impl PlaceError {
    pub(crate) fn occupied(item: ItemHandle, address: CellAddress, by: ItemHandle) -> Self {
        Self::Occupied {
            address,
            by,
            context: ErrorContext::new()
                .with_item(item)
                .with_address(address)
                .with_message("placement never displaces items"),
        }
    }
}

impl StashError for PlaceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PlaceError::ItemNotFound(_)
            | PlaceError::AlreadyPresent { .. }
            | PlaceError::UnknownRegion(_) => ErrorSeverity::Validation,
            PlaceError::Occupied { .. } | PlaceError::NoSpace(_) => ErrorSeverity::Recoverable,
            PlaceError::Placement { error, .. } => error.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            PlaceError::Occupied { context, .. } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlaceError::ItemNotFound(_) => "PLACE_ITEM_NOT_FOUND",
            PlaceError::AlreadyPresent { .. } => "PLACE_ALREADY_PRESENT",
            PlaceError::UnknownRegion(_) => "PLACE_UNKNOWN_REGION",
            PlaceError::Occupied { .. } => "PLACE_OCCUPIED",
            PlaceError::Placement { error, .. } => error.error_code(),
            PlaceError::NoSpace(_) => "PLACE_NO_SPACE",
        }
    }
}
