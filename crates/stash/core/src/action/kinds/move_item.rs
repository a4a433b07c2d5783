//! Move action: relocation with swap or drop of the blocker.

use crate::action::error::MoveError;
use crate::action::{MoveOutcome, MoveReport, MoveRequest, StashTransition, resolve_move};
use crate::env::StashEnv;
use crate::state::Equipment;

/// Relocates one item, displacing whatever anchors at the destination.
///
/// # Invariants
///
/// - The item is in the catalog and referenced by the source cell
/// - After apply, the item anchors at the destination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveItemAction {
    pub request: MoveRequest,
}

impl MoveItemAction {
    pub fn new(request: MoveRequest) -> Self {
        Self { request }
    }
}

impl StashTransition for MoveItemAction {
    type Error = MoveError;
    type Result = MoveReport;

    fn pre_validate(&self, equipment: &Equipment, env: &StashEnv<'_>) -> Result<(), Self::Error> {
        let MoveRequest { item, source, .. } = self.request;

        if env.items().definition(item).is_none() {
            return Err(MoveError::ItemNotFound(item));
        }
        let region = equipment
            .region(source.region)
            .ok_or(MoveError::UnknownRegion(source.region))?;
        if region.cell(source.cell).and_then(|cell| cell.item()) != Some(item) {
            return Err(MoveError::not_at_source(item, source));
        }

        Ok(())
    }

    fn apply(&self, equipment: &mut Equipment, env: &StashEnv<'_>) -> Result<MoveReport, MoveError> {
        let outcome = resolve_move(equipment, env.items(), &self.request, env.config())?;

        let (changed, displaced) = match outcome {
            MoveOutcome::Unchanged => (false, Vec::new()),
            MoveOutcome::Applied(applied) => {
                *equipment = applied.equipment;
                (true, applied.displaced)
            }
        };

        Ok(MoveReport {
            item: self.request.item,
            destination: self.request.destination,
            changed,
            displaced,
        })
    }

    fn post_validate(&self, equipment: &Equipment, _env: &StashEnv<'_>) -> Result<(), Self::Error> {
        debug_assert_eq!(
            equipment.item_at(self.request.destination),
            Some(self.request.item),
            "moved item should reference the destination"
        );

        Ok(())
    }
}
