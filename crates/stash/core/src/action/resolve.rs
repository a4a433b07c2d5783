//! Move/swap resolution.
//!
//! [`resolve_move`] is a pure function from the current aggregate to a
//! replacement aggregate. The steps are:
//!
//! 1. Resolve the moved item by handle and check it sits at the stated source.
//! 2. Validate the destination for the moved item (slot rules, geometry).
//! 3. Find the blocker: an item whose anchor lies inside the target block.
//! 4. Evacuate the moved item from the source region.
//! 5. Swap the blocker back onto the moved item's former anchor if it fits,
//!    otherwise drop it.
//! 6. Clear anything still overlapping the target block, then write the
//!    moved item.

use super::{AppliedMove, Displacement, MoveError, MoveOutcome, MoveRequest};
use crate::config::StashConfig;
use crate::env::ItemOracle;
use crate::placement::{CellSet, check_placement};
use crate::state::{Cell, CellAddress, Equipment, ItemHandle};

/// Resolves `request` against `equipment`.
///
/// Returns [`MoveOutcome::Unchanged`] when the item already sits at the
/// destination. Rejections leave `equipment` untouched.
pub fn resolve_move<I>(
    equipment: &Equipment,
    items: &I,
    request: &MoveRequest,
    config: &StashConfig,
) -> Result<MoveOutcome, MoveError>
where
    I: ItemOracle + ?Sized,
{
    let MoveRequest {
        item,
        source,
        destination,
    } = *request;

    let definition = items.definition(item).ok_or(MoveError::ItemNotFound(item))?;

    let source_region = equipment
        .region(source.region)
        .ok_or(MoveError::UnknownRegion(source.region))?;
    if source_region.cell(source.cell).and_then(|cell| cell.item()) != Some(item) {
        return Err(MoveError::not_at_source(item, source));
    }
    // The request may name any cell of the item; a swapped-back blocker
    // takes the anchor it leaves behind.
    let vacated = source_region
        .anchor_of(item)
        .map(|anchor| CellAddress::new(source.region, anchor))
        .ok_or_else(|| MoveError::not_at_source(item, source))?;

    let target_region = equipment
        .region(destination.region)
        .ok_or(MoveError::UnknownRegion(destination.region))?;
    if !target_region.contains_cell(destination.cell) {
        return Err(MoveError::InvalidCell {
            address: destination,
            len: target_region.len(),
        });
    }

    if vacated == destination {
        return Ok(MoveOutcome::Unchanged);
    }

    let target = check_placement(&definition, target_region, destination.cell)
        .map_err(|error| MoveError::Placement { destination, error })?;

    let blocker = target
        .iter()
        .find_map(|&cell| match target_region.cell(cell) {
            Some(Cell::Anchor(other)) if other != item => Some(other),
            _ => None,
        });

    let mut next = equipment.clone();
    let mut displaced = Vec::new();
    next.clear_in_region(source.region, item);

    if let Some(blocker) = blocker {
        next.clear_in_region(destination.region, blocker);
        match swap_back_cells(&next, items, blocker, vacated, destination, &target) {
            Some(cells) => {
                next.write_block(vacated.region, vacated.cell, blocker, &cells);
                displaced.push(Displacement::Swapped {
                    item: blocker,
                    to: vacated,
                });
            }
            None if !config.allow_lost_blockers => {
                return Err(MoveError::blocker_would_be_lost(item, blocker, destination));
            }
            None => displaced.push(Displacement::Dropped { item: blocker }),
        }
    }

    for other in overlapping_items(&next, item, destination, &target) {
        if !config.allow_lost_blockers {
            return Err(MoveError::blocker_would_be_lost(item, other, destination));
        }
        next.clear_in_region(destination.region, other);
        displaced.push(Displacement::Dropped { item: other });
    }

    next.write_block(destination.region, destination.cell, item, &target);

    Ok(MoveOutcome::Applied(AppliedMove {
        equipment: next,
        displaced,
    }))
}

/// Cells the blocker would occupy at the vacated anchor, if it can go there.
///
/// The cells must be free after evacuation and, within one region, must not
/// overlap the block the moved item is about to take.
fn swap_back_cells<I>(
    equipment: &Equipment,
    items: &I,
    blocker: ItemHandle,
    vacated: CellAddress,
    destination: CellAddress,
    target: &[u16],
) -> Option<CellSet>
where
    I: ItemOracle + ?Sized,
{
    let definition = items.definition(blocker)?;
    let region = equipment.region(vacated.region)?;
    let cells = check_placement(&definition, region, vacated.cell).ok()?;

    let free = cells
        .iter()
        .all(|&cell| region.cell(cell).is_some_and(|cell| cell.is_empty()));
    let clear_of_target =
        vacated.region != destination.region || cells.iter().all(|cell| !target.contains(cell));

    (free && clear_of_target).then_some(cells)
}

/// Items other than `moved` still referencing any target cell.
fn overlapping_items(
    equipment: &Equipment,
    moved: ItemHandle,
    destination: CellAddress,
    target: &[u16],
) -> Vec<ItemHandle> {
    let Some(region) = equipment.region(destination.region) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for &cell in target {
        if let Some(other) = region.cell(cell).and_then(|cell| cell.item())
            && other != moved
            && !found.contains(&other)
        {
            found.push(other);
        }
    }
    found
}
