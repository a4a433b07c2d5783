//! Structural invariant checks for an equipment aggregate.

use std::collections::BTreeMap;

use crate::env::ItemOracle;
use crate::placement::occupied_cells;
use crate::state::{Cell, CellAddress, Equipment, IntegrityError, ItemHandle, Region};

impl Equipment {
    /// Verifies every structural invariant of the aggregate:
    ///
    /// - every item occurs in exactly one block across all regions
    /// - slot items are 1×1
    /// - each container block is exactly the item's footprint, anchored at its
    ///   top-left, inside one sub-grid
    /// - no covered cell exists outside a valid block
    pub fn check_integrity<I>(&self, items: &I) -> Result<(), IntegrityError>
    where
        I: ItemOracle + ?Sized,
    {
        let mut seen: BTreeMap<ItemHandle, CellAddress> = BTreeMap::new();
        let mut record = |item: ItemHandle, address: CellAddress| match seen.get(&item) {
            Some(&first) => Err(IntegrityError::DuplicateItem {
                item,
                first,
                second: address,
            }),
            None => {
                seen.insert(item, address);
                Ok(())
            }
        };

        for slot in self.slots() {
            let Some(item) = slot.item() else { continue };
            let address = CellAddress::slot(slot.name());
            let definition = items
                .definition(item)
                .ok_or(IntegrityError::UnknownItem { item, address })?;
            if !definition.footprint.is_single() {
                return Err(IntegrityError::SlotFootprint {
                    item,
                    region: address.region,
                });
            }
            record(item, address)?;
        }

        for container in self.containers() {
            let region = Region::Container(container);
            let id = region.id();
            let mut claimed = vec![false; usize::from(container.len())];

            for (anchor, item) in container.anchored_items() {
                let address = CellAddress::new(id, anchor);
                let definition = items
                    .definition(item)
                    .ok_or(IntegrityError::UnknownItem { item, address })?;
                let block = occupied_cells(region, anchor, definition.footprint)
                    .map_err(|_| IntegrityError::OutOfBounds { item, address })?;

                for &index in &block {
                    let expected = if index == anchor {
                        Cell::Anchor(item)
                    } else {
                        Cell::Covered { item, anchor }
                    };
                    let found = container.cell(index).unwrap_or_default();
                    if found != expected {
                        return Err(IntegrityError::BlockMismatch {
                            address: CellAddress::new(id, index),
                            expected: item,
                            found: found.item(),
                        });
                    }
                    claimed[usize::from(index)] = true;
                }
                record(item, address)?;
            }

            for (index, cell) in container.cells().iter().enumerate() {
                if let Some(item) = cell.item()
                    && !claimed[index]
                {
                    return Err(IntegrityError::StrayCell {
                        address: CellAddress::new(id, index as u16),
                        item,
                    });
                }
            }
        }

        Ok(())
    }
}
