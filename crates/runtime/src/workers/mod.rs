//! Background workers owned by the runtime.
mod stash;

pub use stash::{Command, StashWorker};
