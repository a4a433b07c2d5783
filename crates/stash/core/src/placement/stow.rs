//! Putting items that are not yet stored into free space.
//!
//! Unlike moves, these helpers never displace anything: the target cells must
//! be empty.

use super::{PlaceError, check_placement};
use crate::env::ItemOracle;
use crate::state::{CellAddress, Equipment, ItemHandle};

impl Equipment {
    /// Returns a copy of the aggregate with `item` written at `address`.
    pub fn place<I>(
        &self,
        items: &I,
        item: ItemHandle,
        address: CellAddress,
    ) -> Result<Equipment, PlaceError>
    where
        I: ItemOracle + ?Sized,
    {
        let definition = items.definition(item).ok_or(PlaceError::ItemNotFound(item))?;
        if let Some(at) = self.locate(item) {
            return Err(PlaceError::AlreadyPresent { item, at });
        }

        let region = self
            .region(address.region)
            .ok_or(PlaceError::UnknownRegion(address.region))?;
        let cells = check_placement(&definition, region, address.cell)
            .map_err(|error| PlaceError::Placement { address, error })?;

        if let Some(by) = cells
            .iter()
            .find_map(|&cell| region.cell(cell).and_then(|cell| cell.item()))
        {
            return Err(PlaceError::occupied(item, address, by));
        }

        let mut next = self.clone();
        next.write_block(address.region, address.cell, item, &cells);
        Ok(next)
    }

    /// First address where `item` fits without displacing anything.
    ///
    /// Slots are scanned before containers, each in declaration order, and
    /// container cells in row-major order.
    pub fn first_fit<I>(&self, items: &I, item: ItemHandle) -> Option<CellAddress>
    where
        I: ItemOracle + ?Sized,
    {
        let definition = items.definition(item)?;
        self.regions().find_map(|region| {
            (0..region.len()).find_map(|anchor| {
                let cells = check_placement(&definition, region, anchor).ok()?;
                cells
                    .iter()
                    .all(|&cell| region.cell(cell).is_some_and(|cell| cell.is_empty()))
                    .then(|| CellAddress::new(region.id(), anchor))
            })
        })
    }

    /// Places `item` at its [`first_fit`](Self::first_fit) address.
    pub fn stow<I>(&self, items: &I, item: ItemHandle) -> Result<(Equipment, CellAddress), PlaceError>
    where
        I: ItemOracle + ?Sized,
    {
        if items.definition(item).is_none() {
            return Err(PlaceError::ItemNotFound(item));
        }
        if let Some(at) = self.locate(item) {
            return Err(PlaceError::AlreadyPresent { item, at });
        }
        let address = self.first_fit(items, item).ok_or(PlaceError::NoSpace(item))?;
        let next = self.place(items, item, address)?;
        Ok((next, address))
    }
}
