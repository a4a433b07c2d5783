//! Async runtime that owns equipment aggregates and serializes every change.
//!
//! One [`StashWorker`](workers::StashWorker) holds the authoritative
//! [`Equipment`](stash_core::Equipment) of each registered actor. Callers talk
//! to it through a cloneable [`StashHandle`]; commands are processed one at a
//! time, so two moves against the same aggregate never interleave.
//!
//! Modules:
//! - [`api`]: the handle and runtime error types
//! - [`events`]: topic-based broadcast of committed and rejected actions
//! - [`workers`]: the background task that runs the [`StashEngine`](stash_core::StashEngine)
pub mod api;
pub mod events;
pub mod runtime;
pub mod workers;

pub use api::{ActorId, Result, RuntimeError, StashHandle};
pub use events::{Event, EventBus, Topic};
pub use runtime::{RuntimeBuilder, RuntimeConfig, StashRuntime};
