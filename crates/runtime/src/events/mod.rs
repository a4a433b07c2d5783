//! Event broadcasting for committed and rejected stash actions.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ActionRejected, ItemCleared, ItemDropped, ItemMoved, ItemPlaced};
