//! Catalog access errors.

use crate::env::Footprint;
use crate::error::{ErrorSeverity, StashError};
use crate::state::ItemHandle;

/// Errors raised while building or querying an item catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Item definition was not found by handle.
    #[error("item definition {0} not found")]
    ItemNotFound(ItemHandle),

    /// Two catalog entries share a handle.
    #[error("item handle {0} defined more than once")]
    DuplicateHandle(ItemHandle),

    /// Footprint side is zero or larger than the engine supports.
    #[error("item {handle} has unsupported footprint {footprint}")]
    InvalidFootprint {
        handle: ItemHandle,
        footprint: Footprint,
    },
}

impl StashError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::ItemNotFound(_) => ErrorSeverity::Validation,
            OracleError::DuplicateHandle(_) | OracleError::InvalidFootprint { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            OracleError::DuplicateHandle(_) => "ORACLE_DUPLICATE_HANDLE",
            OracleError::InvalidFootprint { .. } => "ORACLE_INVALID_FOOTPRINT",
        }
    }
}
