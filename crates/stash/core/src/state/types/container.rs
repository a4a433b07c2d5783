//! Grid container storage.
//!
//! A container is a `width × height` row-major grid built from one or more
//! sub-grids stacked top to bottom. All sub-grids share the container width;
//! their heights are kept in `bands` so a footprint can be kept from
//! straddling the seam between two of them.

use arrayvec::ArrayVec;

use super::{ContainerName, ItemHandle};
use crate::config::StashConfig;

/// State of one container cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Top-left cell of an item's block; the authoritative location.
    Anchor(ItemHandle),
    /// Non-anchor cell of an item's block, pointing back at its anchor.
    Covered { item: ItemHandle, anchor: u16 },
}

impl Cell {
    /// Item referenced by this cell, anchored or covered.
    pub fn item(&self) -> Option<ItemHandle> {
        match *self {
            Cell::Empty => None,
            Cell::Anchor(item) | Cell::Covered { item, .. } => Some(item),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Rectangular multi-cell region with no category restriction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridContainer {
    name: ContainerName,
    width: u8,
    height: u8,
    bands: ArrayVec<u8, { StashConfig::MAX_SUB_GRIDS }>,
    cells: Vec<Cell>,
}

impl GridContainer {
    /// Builds an empty container from the heights of its chained sub-grids.
    ///
    /// Callers validate dimensions beforehand (see [`crate::state::LayoutSpec`]).
    pub(crate) fn from_bands(
        name: ContainerName,
        width: u8,
        bands: ArrayVec<u8, { StashConfig::MAX_SUB_GRIDS }>,
    ) -> Self {
        let height = bands.iter().sum::<u8>();
        let len = usize::from(width) * usize::from(height);
        Self {
            name,
            width,
            height,
            bands,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Builds an empty container made of a single `width × height` sub-grid.
    pub fn single(name: ContainerName, width: u8, height: u8) -> Self {
        let mut bands = ArrayVec::new();
        bands.push(height);
        Self::from_bands(name, width, bands)
    }

    pub fn name(&self) -> ContainerName {
        self.name
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Heights of the chained sub-grids, top to bottom.
    pub fn bands(&self) -> &[u8] {
        &self.bands
    }

    pub fn len(&self) -> u16 {
        self.cells.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: u16) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    /// Splits a row-major offset into `(column, row)`.
    pub fn coords(&self, index: u16) -> Option<(u8, u8)> {
        if index >= self.len() {
            return None;
        }
        let width = u16::from(self.width);
        Some(((index % width) as u8, (index / width) as u8))
    }

    /// Row-major offset of `(column, row)`, if inside the grid.
    pub fn index(&self, column: u8, row: u8) -> Option<u16> {
        (column < self.width && row < self.height)
            .then(|| u16::from(row) * u16::from(self.width) + u16::from(column))
    }

    /// Index of the sub-grid containing `row`.
    pub fn band_of(&self, row: u8) -> Option<usize> {
        let mut start = 0u8;
        for (band, &height) in self.bands.iter().enumerate() {
            if row < start + height {
                return Some(band);
            }
            start += height;
        }
        None
    }

    pub fn references(&self, item: ItemHandle) -> bool {
        self.cells.iter().any(|cell| cell.item() == Some(item))
    }

    pub fn anchor_of(&self, item: ItemHandle) -> Option<u16> {
        self.cells
            .iter()
            .position(|cell| *cell == Cell::Anchor(item))
            .map(|index| index as u16)
    }

    /// Distinct items anchored in this container, in row-major order.
    pub fn anchored_items(&self) -> impl Iterator<Item = (u16, ItemHandle)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| match *cell {
                Cell::Anchor(item) => Some((index as u16, item)),
                _ => None,
            })
    }

    /// Removes every reference to `item`, returning whether anything changed.
    pub(crate) fn clear_item(&mut self, item: ItemHandle) -> bool {
        let mut cleared = false;
        for cell in self.cells.iter_mut().filter(|cell| cell.item() == Some(item)) {
            *cell = Cell::Empty;
            cleared = true;
        }
        cleared
    }

    /// Writes `item` as a block anchored at `anchor` covering `cells`.
    pub(crate) fn write_block(&mut self, item: ItemHandle, anchor: u16, cells: &[u16]) {
        for &index in cells {
            let state = if index == anchor {
                Cell::Anchor(item)
            } else {
                Cell::Covered { item, anchor }
            };
            if let Some(cell) = self.cells.get_mut(usize::from(index)) {
                *cell = state;
            }
        }
    }
}
