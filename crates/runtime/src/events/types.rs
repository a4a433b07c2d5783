//! Payloads carried by [`Event`](super::Event).

use serde::{Deserialize, Serialize};

use stash_core::{Action, CellAddress, Displacement, ItemHandle, TransitionPhase};

use crate::api::ActorId;

/// A move committed to an actor's equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMoved {
    pub actor: ActorId,
    pub item: ItemHandle,
    pub source: CellAddress,
    pub destination: CellAddress,
    /// Items that left the destination, swapped back or dropped.
    pub displaced: Vec<Displacement>,
}

/// An item removed from the aggregate as a side effect of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDropped {
    pub actor: ActorId,
    pub item: ItemHandle,
    /// Move destination that evicted the item.
    pub destination: CellAddress,
}

/// An item put into empty cells by a place or stow action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlaced {
    pub actor: ActorId,
    pub item: ItemHandle,
    pub address: CellAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCleared {
    pub actor: ActorId,
    pub item: ItemHandle,
}

/// An action the engine refused. The aggregate is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRejected {
    pub actor: ActorId,
    pub action: Action,
    pub phase: TransitionPhase,
    pub code: String,
    pub error: String,
}
