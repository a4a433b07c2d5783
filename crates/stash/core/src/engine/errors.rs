//! Error types for the action execution pipeline.

use crate::action::{
    ClearItemAction, MoveItemAction, PlaceItemAction, StashTransition, StowItemAction,
};
use crate::error::{ErrorSeverity, StashError};
use crate::state::IntegrityError;

/// Stage of the pre_validate → apply → post_validate pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// An action error tagged with the stage that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the stash engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveItemAction as StashTransition>::Error>),

    #[error("place action failed: {0}")]
    Place(TransitionPhaseError<<PlaceItemAction as StashTransition>::Error>),

    #[error("stow action failed: {0}")]
    Stow(TransitionPhaseError<<StowItemAction as StashTransition>::Error>),

    #[error("clear action failed: {0}")]
    Clear(TransitionPhaseError<<ClearItemAction as StashTransition>::Error>),

    #[error("{action} produced an inconsistent aggregate: {error}")]
    #[cfg_attr(feature = "serde", serde(skip))]
    Integrity {
        action: &'static str,
        #[source]
        error: IntegrityError,
    },
}

impl ExecuteError {
    /// Phase that failed; integrity failures count as post-validation.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Move(error) => error.phase,
            Self::Place(error) => error.phase,
            Self::Stow(error) => error.phase,
            Self::Clear(error) => error.phase,
            Self::Integrity { .. } => TransitionPhase::PostValidate,
        }
    }
}

impl StashError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Move(error) => error.error.severity(),
            Self::Place(error) => error.error.severity(),
            Self::Stow(error) => error.error.severity(),
            Self::Clear(error) => error.error.severity(),
            Self::Integrity { error, .. } => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Move(error) => error.error.error_code(),
            Self::Place(error) => error.error.error_code(),
            Self::Stow(error) => error.error.error_code(),
            Self::Clear(error) => error.error.error_code(),
            Self::Integrity { error, .. } => error.error_code(),
        }
    }
}
