//! Concrete stash actions, one per mutation the owning layer can request.
//!
//! All of them implement [`StashTransition`](crate::action::StashTransition)
//! and run through the engine's three-phase pipeline.

mod clear_item;
mod move_item;
mod place_item;
mod stow_item;

pub use clear_item::ClearItemAction;
pub use move_item::MoveItemAction;
pub use place_item::PlaceItemAction;
pub use stow_item::StowItemAction;
