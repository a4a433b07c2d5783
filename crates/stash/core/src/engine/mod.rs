//! Action execution pipeline.
//!
//! The [`StashEngine`] is the authoritative reducer for one [`Equipment`]
//! aggregate. Every mutation flows through the same three-phase pipeline:
//! pre_validate → apply → post_validate, followed by a full integrity check.
//! The action runs against a staged copy, so a failure at any phase leaves
//! the aggregate exactly as it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::StashEnv;
use crate::state::Equipment;

/// Engine that executes actions against one actor's equipment.
pub struct StashEngine<'a> {
    equipment: &'a mut Equipment,
}

impl<'a> StashEngine<'a> {
    pub fn new(equipment: &'a mut Equipment) -> Self {
        Self { equipment }
    }

    /// Executes `action` and commits the resulting aggregate on success.
    pub fn execute(
        &mut self,
        env: StashEnv<'_>,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        let mut staged = self.equipment.clone();

        let result = transition::execute_transition(action, &mut staged, &env)?;

        staged
            .check_integrity(env.items())
            .map_err(|error| ExecuteError::Integrity {
                action: action.as_snake_case(),
                error,
            })?;

        *self.equipment = staged;
        Ok(result)
    }

    pub fn equipment(&self) -> &Equipment {
        self.equipment
    }
}
