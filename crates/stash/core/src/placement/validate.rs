//! Fit and restriction rules.

use super::{BoundsError, CellSet, PlacementError, occupied_cells};
use crate::env::ItemDefinition;
use crate::state::Region;

/// Checks whether `definition` is legal at `anchor` of `region` and returns
/// the cells it would cover.
///
/// Slots require a 1×1 footprint and, when restricted, an admitted
/// sub-category. Containers only check geometry. Occupancy by other items is
/// not checked here.
pub fn check_placement(
    definition: &ItemDefinition,
    region: Region<'_>,
    anchor: u16,
) -> Result<CellSet, PlacementError> {
    if let Region::Slot(slot) = region {
        if anchor != 0 {
            return Err(BoundsError::AnchorOutOfRange { anchor, len: 1 }.into());
        }
        if !definition.footprint.is_single() {
            return Err(PlacementError::FootprintNotSingle {
                slot: slot.name(),
                footprint: definition.footprint,
            });
        }
        if !slot.admits(definition.sub_category) {
            return Err(PlacementError::CategoryNotAllowed {
                slot: slot.name(),
                sub_category: definition.sub_category,
            });
        }
    }

    Ok(occupied_cells(region, anchor, definition.footprint)?)
}

/// Boolean form of [`check_placement`].
pub fn can_place(definition: &ItemDefinition, region: Region<'_>, anchor: u16) -> bool {
    check_placement(definition, region, anchor).is_ok()
}
