//! Deterministic spatial allocation rules for equipment and grid containers.
//!
//! `stash-core` decides where variably-sized items may be stored among an
//! actor's equipment slots and grid containers, and resolves relocation
//! requests (including swaps) without ever letting two items overlap a cell.
//! Every operation is a pure function from one [`state::Equipment`] aggregate
//! to a replacement aggregate; [`engine::StashEngine`] runs them through a
//! validated pipeline for owners that keep a single authoritative copy.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod placement;
pub mod state;

pub use action::{
    Action, ActionResult, AppliedMove, ClearError, ClearItemAction, Displacement, MoveError,
    MoveItemAction, MoveOutcome, MoveReport, MoveRequest, PlaceItemAction, StashTransition,
    StowItemAction, resolve_move,
};
pub use config::StashConfig;
pub use engine::{ExecuteError, StashEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    Footprint, ItemCategory, ItemDefinition, ItemOracle, ItemsSnapshot, OracleError, StashEnv,
    SubCategory, SubCategorySet,
};
pub use error::{ErrorContext, ErrorSeverity, StashError};
pub use placement::{
    BoundsError, CellSet, PlaceError, PlacementError, can_place, check_placement, occupied_cells,
};
pub use state::{
    Cell, CellAddress, ContainerName, ContainerSpec, Equipment, EquipmentSlot, GridContainer,
    IntegrityError, ItemHandle, LayoutError, LayoutSpec, Region, RegionId, SlotName, SlotSpec,
    SubGridSpec,
};
