//! Footprint-to-cell resolution.

use arrayvec::ArrayVec;

use super::BoundsError;
use crate::config::StashConfig;
use crate::env::Footprint;
use crate::state::Region;

/// Cell offsets covered by one footprint, anchor first, row-major.
pub type CellSet = ArrayVec<u16, { StashConfig::MAX_FOOTPRINT_CELLS }>;

/// Returns the cells `footprint` would cover when anchored at `anchor`.
///
/// Slots always resolve to the single requested index whatever the footprint;
/// sizing rules for slots belong to [`check_placement`](super::check_placement).
/// Container blocks must stay inside the grid and inside one sub-grid.
pub fn occupied_cells(
    region: Region<'_>,
    anchor: u16,
    footprint: Footprint,
) -> Result<CellSet, BoundsError> {
    let container = match region {
        Region::Slot(_) => {
            let mut cells = CellSet::new();
            cells.push(anchor);
            return Ok(cells);
        }
        Region::Container(container) => container,
    };

    if !footprint.is_valid() {
        return Err(BoundsError::UnsupportedFootprint { footprint });
    }

    let (column, row) = container
        .coords(anchor)
        .ok_or(BoundsError::AnchorOutOfRange {
            anchor,
            len: container.len(),
        })?;

    let right = u16::from(column) + u16::from(footprint.width);
    let bottom = u16::from(row) + u16::from(footprint.height);
    if right > u16::from(container.width()) || bottom > u16::from(container.height()) {
        return Err(BoundsError::Overflow {
            footprint,
            column,
            row,
            width: container.width(),
            height: container.height(),
        });
    }

    let last_row = row + footprint.height - 1;
    if container.band_of(row) != container.band_of(last_row) {
        return Err(BoundsError::CrossesSubGrid { footprint, row });
    }

    let mut cells = CellSet::new();
    for dy in 0..footprint.height {
        for dx in 0..footprint.width {
            if let Some(index) = container.index(column + dx, row + dy) {
                cells.push(index);
            }
        }
    }
    Ok(cells)
}
