//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, StashTransition};
use crate::env::StashEnv;
use crate::state::Equipment;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the aggregate and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    equipment: &mut Equipment,
    env: &StashEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: StashTransition,
{
    transition
        .pre_validate(equipment, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(equipment, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(equipment, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    equipment: &mut Equipment,
    env: &StashEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => {
            let report = drive_transition(transition, equipment, env).map_err(ExecuteError::Move)?;
            Ok(ActionResult::Move(report))
        }
        Action::Place(transition) => {
            let address =
                drive_transition(transition, equipment, env).map_err(ExecuteError::Place)?;
            Ok(ActionResult::Placed(address))
        }
        Action::Stow(transition) => {
            let address = drive_transition(transition, equipment, env).map_err(ExecuteError::Stow)?;
            Ok(ActionResult::Stowed(address))
        }
        Action::Clear(transition) => {
            drive_transition(transition, equipment, env).map_err(ExecuteError::Clear)?;
            Ok(ActionResult::Cleared)
        }
    }
}
