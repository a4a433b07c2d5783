//! Action domain: every mutation of an equipment aggregate.
//!
//! # Module Structure
//!
//! - `types`: Move request and outcome types (MoveRequest, MoveOutcome, Displacement)
//! - `resolve`: The move/swap resolver (pure, old aggregate → new aggregate)
//! - `kinds`: Concrete actions (Move, Place, Stow, Clear)
//! - `error`: Action error types (MoveError, ClearError)

pub mod error;
pub mod kinds;
mod resolve;
pub mod types;

pub use error::{ClearError, MoveError};
pub use kinds::{ClearItemAction, MoveItemAction, PlaceItemAction, StowItemAction};
pub use resolve::resolve_move;
pub use types::{AppliedMove, Displacement, MoveOutcome, MoveReport, MoveRequest};

use crate::env::StashEnv;
use crate::state::{CellAddress, Equipment, ItemHandle};

/// Defines how a concrete action mutates an equipment aggregate.
pub trait StashTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the aggregate **before** mutation.
    fn pre_validate(&self, _equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the aggregate directly.
    fn apply(
        &self,
        equipment: &mut Equipment,
        env: &StashEnv<'_>,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the aggregate **after** mutation.
    fn post_validate(&self, _equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Every action the engine executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveItemAction),
    Place(PlaceItemAction),
    Stow(StowItemAction),
    Clear(ClearItemAction),
}

impl Action {
    pub fn move_item(item: ItemHandle, source: CellAddress, destination: CellAddress) -> Self {
        Self::Move(MoveItemAction::new(MoveRequest::new(
            item,
            source,
            destination,
        )))
    }

    pub fn place(item: ItemHandle, address: CellAddress) -> Self {
        Self::Place(PlaceItemAction::new(item, address))
    }

    pub fn stow(item: ItemHandle) -> Self {
        Self::Stow(StowItemAction::new(item))
    }

    pub fn clear(item: ItemHandle) -> Self {
        Self::Clear(ClearItemAction::new(item))
    }

    /// Item the action is about.
    pub fn item(&self) -> ItemHandle {
        match self {
            Action::Move(action) => action.request.item,
            Action::Place(action) => action.item,
            Action::Stow(action) => action.item,
            Action::Clear(action) => action.item,
        }
    }

    /// Returns the snake_case name of the action, used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move_item",
            Action::Place(_) => "place_item",
            Action::Stow(_) => "stow_item",
            Action::Clear(_) => "clear_item",
        }
    }
}

impl From<MoveItemAction> for Action {
    fn from(action: MoveItemAction) -> Self {
        Self::Move(action)
    }
}

impl From<PlaceItemAction> for Action {
    fn from(action: PlaceItemAction) -> Self {
        Self::Place(action)
    }
}

impl From<StowItemAction> for Action {
    fn from(action: StowItemAction) -> Self {
        Self::Stow(action)
    }
}

impl From<ClearItemAction> for Action {
    fn from(action: ClearItemAction) -> Self {
        Self::Clear(action)
    }
}

/// Action-specific result returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move(MoveReport),
    Placed(CellAddress),
    Stowed(CellAddress),
    Cleared,
}
