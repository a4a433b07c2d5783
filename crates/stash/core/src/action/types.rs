//! Request and outcome types for relocation.

use crate::state::{CellAddress, Equipment, ItemHandle};

/// Relocate `item` from `source` to `destination`.
///
/// `source` is trusted to be a cell the caller read the item from; the moved
/// item is identified by handle, never by re-reading that cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub item: ItemHandle,
    pub source: CellAddress,
    pub destination: CellAddress,
}

impl MoveRequest {
    pub fn new(item: ItemHandle, source: CellAddress, destination: CellAddress) -> Self {
        Self {
            item,
            source,
            destination,
        }
    }
}

/// What happened to an item that occupied the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Displacement {
    /// Written back at the vacated source.
    Swapped { item: ItemHandle, to: CellAddress },
    /// Removed from the aggregate entirely.
    Dropped { item: ItemHandle },
}

impl Displacement {
    pub fn item(&self) -> ItemHandle {
        match *self {
            Displacement::Swapped { item, .. } | Displacement::Dropped { item } => item,
        }
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, Displacement::Dropped { .. })
    }
}

/// A completed relocation: the replacement aggregate plus every item that
/// left the destination cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedMove {
    pub equipment: Equipment,
    pub displaced: Vec<Displacement>,
}

impl AppliedMove {
    /// Items that no longer exist anywhere in the aggregate.
    pub fn dropped(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.displaced
            .iter()
            .filter(|displacement| displacement.is_dropped())
            .map(Displacement::item)
    }
}

/// Result of a successful move resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The item already sits at the destination.
    Unchanged,
    Applied(AppliedMove),
}

impl MoveOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, MoveOutcome::Unchanged)
    }

    /// Replacement aggregate, if the move changed anything.
    pub fn equipment(&self) -> Option<&Equipment> {
        match self {
            MoveOutcome::Unchanged => None,
            MoveOutcome::Applied(applied) => Some(&applied.equipment),
        }
    }

    pub fn displaced(&self) -> &[Displacement] {
        match self {
            MoveOutcome::Unchanged => &[],
            MoveOutcome::Applied(applied) => &applied.displaced,
        }
    }
}

/// Action-level summary of a move, without the aggregate itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    pub item: ItemHandle,
    pub destination: CellAddress,
    /// `false` for self-moves.
    pub changed: bool,
    pub displaced: Vec<Displacement>,
}
