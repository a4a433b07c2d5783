//! Action error types.

use crate::error::{ErrorContext, ErrorSeverity, StashError};
use crate::placement::PlacementError;
use crate::state::{CellAddress, ItemHandle, RegionId};

// ============================================================================
// Move Errors
// ============================================================================

/// Explicit rejection of a move request. The input aggregate is never
/// modified when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Moved item is not in the catalog.
    #[error("item {0} is not in the catalog")]
    ItemNotFound(ItemHandle),

    /// Region is not part of this equipment.
    #[error("region {0} is not part of this equipment")]
    UnknownRegion(RegionId),

    /// Cell index beyond the region.
    #[error("{address} is outside a region of {len} cells")]
    InvalidCell { address: CellAddress, len: u16 },

    /// Stated source does not hold the item.
    #[error("item {item} is not at {address}")]
    ItemNotAtSource {
        item: ItemHandle,
        address: CellAddress,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    /// Destination is not a legal placement for the item.
    #[error("cannot move to {destination}: {error}")]
    Placement {
        destination: CellAddress,
        #[source]
        error: PlacementError,
    },

    /// Lost blockers are disabled and the move would drop one.
    #[error("moving to {destination} would drop item {blocker}")]
    BlockerWouldBeLost {
        blocker: ItemHandle,
        destination: CellAddress,
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },
}

impl MoveError {
    /// Creates an ItemNotAtSource error with context.
    pub fn not_at_source(item: ItemHandle, address: CellAddress) -> Self {
        Self::ItemNotAtSource {
            item,
            address,
            context: ErrorContext::new()
                .with_item(item)
                .with_address(address)
                .with_message("source cell does not reference the moved item"),
        }
    }

    /// Creates a BlockerWouldBeLost error with context.
    pub fn blocker_would_be_lost(
        item: ItemHandle,
        blocker: ItemHandle,
        destination: CellAddress,
    ) -> Self {
        Self::BlockerWouldBeLost {
            blocker,
            destination,
            context: ErrorContext::new()
                .with_item(item)
                .with_address(destination)
                .with_message("lost blockers are disabled"),
        }
    }
}

impl StashError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound(_)
            | Self::UnknownRegion(_)
            | Self::InvalidCell { .. }
            | Self::ItemNotAtSource { .. } => ErrorSeverity::Validation,
            Self::Placement { error, .. } => error.severity(),
            Self::BlockerWouldBeLost { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::ItemNotAtSource { context, .. } | Self::BlockerWouldBeLost { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "MOVE_ITEM_NOT_FOUND",
            Self::UnknownRegion(_) => "MOVE_UNKNOWN_REGION",
            Self::InvalidCell { .. } => "MOVE_INVALID_CELL",
            Self::ItemNotAtSource { .. } => "MOVE_ITEM_NOT_AT_SOURCE",
            Self::Placement { error, .. } => error.error_code(),
            Self::BlockerWouldBeLost { .. } => "MOVE_BLOCKER_WOULD_BE_LOST",
        }
    }
}

// ============================================================================
// Clear Errors
// ============================================================================

/// Errors from removing an item from the aggregate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClearError {
    #[error("item {0} is not stored in this equipment")]
    NotPresent(ItemHandle),
}

impl StashError for ClearError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPresent(_) => "CLEAR_NOT_PRESENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Footprint;
    use crate::placement::BoundsError;
    use crate::state::{ContainerName, SlotName};

    #[test]
    fn placement_codes_pass_through() {
        let error = MoveError::Placement {
            destination: CellAddress::container(ContainerName::Rig, 1),
            error: PlacementError::Bounds(BoundsError::Overflow {
                footprint: Footprint::new(2, 2),
                column: 1,
                row: 0,
                width: 2,
                height: 2,
            }),
        };
        assert_eq!(error.error_code(), "PLACEMENT_OVERFLOW");
        assert!(error.severity().is_recoverable());
    }

    #[test]
    fn not_at_source_carries_context() {
        let address = CellAddress::slot(SlotName::Pocket2);
        let error = MoveError::not_at_source(ItemHandle(9), address);
        let context = error.context().unwrap();
        assert_eq!(context.item, Some(ItemHandle(9)));
        assert_eq!(context.address, Some(address));
        assert_eq!(error.error_code(), "MOVE_ITEM_NOT_AT_SOURCE");
        assert_eq!(error.to_string(), "item item#9 is not at slot:pocket2[0]");
    }
}
