//! Public runtime API.
mod errors;
mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::StashHandle;

use serde::{Deserialize, Serialize};

/// Identifies the owner of one equipment aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}
