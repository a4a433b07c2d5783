//! Placement rules: which cells a footprint covers and whether an item is
//! legal in a region.
//!
//! - [`occupied_cells`] resolves an anchor plus footprint into cell offsets
//! - [`check_placement`] / [`can_place`] apply slot restrictions and geometry
//! - `stow` adds [`Equipment::place`](crate::state::Equipment::place),
//!   [`Equipment::first_fit`](crate::state::Equipment::first_fit) and
//!   [`Equipment::stow`](crate::state::Equipment::stow)
mod error;
mod occupancy;
mod stow;
mod validate;

pub use error::{BoundsError, PlaceError, PlacementError};
pub use occupancy::{CellSet, occupied_cells};
pub use validate::{can_place, check_placement};
