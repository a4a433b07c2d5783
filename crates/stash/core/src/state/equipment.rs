//! The equipment aggregate: every region one actor owns.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::config::StashConfig;
use crate::env::{ItemOracle, SubCategorySet};
use crate::state::{
    Cell, CellAddress, ContainerName, EquipmentSlot, GridContainer, ItemHandle, LayoutError,
    LayoutSpec, Region, RegionId, SlotName,
};

/// Complete set of an actor's storage regions.
///
/// Created empty from a [`LayoutSpec`]. All mutation goes through the move
/// resolver or the placement helpers, each of which produces a complete
/// replacement aggregate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: ArrayVec<EquipmentSlot, { StashConfig::MAX_SLOTS }>,
    containers: ArrayVec<GridContainer, { StashConfig::MAX_CONTAINERS }>,
}

impl Equipment {
    /// Resolves a layout into an empty aggregate.
    pub fn from_layout(layout: &LayoutSpec) -> Result<Self, LayoutError> {
        let mut equipment = Self::default();

        for spec in &layout.slots {
            if equipment.slot(spec.name).is_some() {
                return Err(LayoutError::DuplicateSlot(spec.name));
            }
            let slot = match &spec.allowed {
                None => EquipmentSlot::new(spec.name),
                Some(allowed) if allowed.is_empty() => {
                    return Err(LayoutError::EmptyAllowList(spec.name));
                }
                Some(allowed) => EquipmentSlot::restricted(
                    spec.name,
                    allowed.iter().copied().collect::<SubCategorySet>(),
                ),
            };
            equipment
                .slots
                .try_push(slot)
                .map_err(|_| LayoutError::TooManySlots {
                    max: StashConfig::MAX_SLOTS,
                })?;
        }

        for spec in &layout.containers {
            let name = spec.name;
            if equipment.container(name).is_some() {
                return Err(LayoutError::DuplicateContainer(name));
            }
            let first = spec
                .sub_grids
                .first()
                .ok_or(LayoutError::EmptyContainer(name))?;

            let mut bands = ArrayVec::<u8, { StashConfig::MAX_SUB_GRIDS }>::new();
            let mut height: u16 = 0;
            for sub_grid in &spec.sub_grids {
                if sub_grid.width == 0
                    || sub_grid.height == 0
                    || sub_grid.width > StashConfig::MAX_CONTAINER_SIDE
                {
                    return Err(LayoutError::InvalidSubGrid {
                        container: name,
                        width: sub_grid.width,
                        height: sub_grid.height,
                    });
                }
                if sub_grid.width != first.width {
                    return Err(LayoutError::MismatchedWidth {
                        container: name,
                        expected: first.width,
                        found: sub_grid.width,
                    });
                }
                bands
                    .try_push(sub_grid.height)
                    .map_err(|_| LayoutError::TooManySubGrids {
                        container: name,
                        max: StashConfig::MAX_SUB_GRIDS,
                    })?;
                height += u16::from(sub_grid.height);
            }
            if height > u16::from(StashConfig::MAX_CONTAINER_SIDE) {
                return Err(LayoutError::TooTall {
                    container: name,
                    height,
                    max: StashConfig::MAX_CONTAINER_SIDE,
                });
            }

            equipment
                .containers
                .try_push(GridContainer::from_bands(name, first.width, bands))
                .map_err(|_| LayoutError::TooManyContainers {
                    max: StashConfig::MAX_CONTAINERS,
                })?;
        }

        Ok(equipment)
    }

    pub fn slots(&self) -> &[EquipmentSlot] {
        &self.slots
    }

    pub fn containers(&self) -> &[GridContainer] {
        &self.containers
    }

    pub fn slot(&self, name: SlotName) -> Option<&EquipmentSlot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }

    pub fn container(&self, name: ContainerName) -> Option<&GridContainer> {
        self.containers
            .iter()
            .find(|container| container.name() == name)
    }

    pub fn region(&self, id: RegionId) -> Option<Region<'_>> {
        match id {
            RegionId::Slot(name) => self.slot(name).map(Region::Slot),
            RegionId::Container(name) => self.container(name).map(Region::Container),
        }
    }

    /// All regions: slots first, then containers, in declaration order.
    pub fn regions(&self) -> impl Iterator<Item = Region<'_>> + '_ {
        self.slots
            .iter()
            .map(Region::Slot)
            .chain(self.containers.iter().map(Region::Container))
    }

    /// Item referencing `address`, whether as anchor or covered cell.
    pub fn item_at(&self, address: CellAddress) -> Option<ItemHandle> {
        self.region(address.region)?.cell(address.cell)?.item()
    }

    /// Item anchored exactly at `address`.
    pub fn anchor_at(&self, address: CellAddress) -> Option<ItemHandle> {
        match self.region(address.region)?.cell(address.cell)? {
            Cell::Anchor(item) => Some(item),
            _ => None,
        }
    }

    /// Anchor address of `item`, if present.
    pub fn locate(&self, item: ItemHandle) -> Option<CellAddress> {
        self.regions().find_map(|region| {
            region
                .anchor_of(item)
                .map(|cell| CellAddress::new(region.id(), cell))
        })
    }

    pub fn contains(&self, item: ItemHandle) -> bool {
        self.regions().any(|region| region.references(item))
    }

    /// Distinct items present, in region order then row-major order.
    pub fn items(&self) -> Vec<ItemHandle> {
        let mut seen = BTreeSet::new();
        let mut items = Vec::new();
        for region in self.regions() {
            for cell in 0..region.len() {
                if let Some(item) = region.cell(cell).and_then(|cell| cell.item())
                    && seen.insert(item)
                {
                    items.push(item);
                }
            }
        }
        items
    }

    pub fn is_empty(&self) -> bool {
        self.regions().all(|region| region.is_empty())
    }

    /// Removes every cell reference to `item` across every region.
    ///
    /// Returns whether anything was removed.
    pub fn clear_item(&mut self, item: ItemHandle) -> bool {
        let mut cleared = false;
        for slot in self.slots.iter_mut().filter(|slot| slot.item() == Some(item)) {
            slot.set(None);
            cleared = true;
        }
        for container in self.containers.iter_mut() {
            cleared |= container.clear_item(item);
        }
        cleared
    }

    /// Pure counterpart of [`Equipment::clear_item`].
    #[must_use]
    pub fn without_item(&self, item: ItemHandle) -> Self {
        let mut next = self.clone();
        next.clear_item(item);
        next
    }

    /// Sums catalog value over each distinct item present.
    ///
    /// Items missing from the catalog contribute nothing.
    pub fn total_value<I>(&self, items: &I) -> u64
    where
        I: ItemOracle + ?Sized,
    {
        self.items()
            .into_iter()
            .filter_map(|item| items.definition(item))
            .map(|definition| u64::from(definition.value))
            .sum()
    }

    /// Removes every reference to `item` inside one region.
    pub(crate) fn clear_in_region(&mut self, region: RegionId, item: ItemHandle) -> bool {
        match region {
            RegionId::Slot(name) => match self.slot_mut(name) {
                Some(slot) if slot.item() == Some(item) => {
                    slot.set(None);
                    true
                }
                _ => false,
            },
            RegionId::Container(name) => self
                .container_mut(name)
                .is_some_and(|container| container.clear_item(item)),
        }
    }

    /// Writes `item` as a block anchored at `anchor`; `cells` must come from
    /// the occupancy resolver for the same region and anchor.
    pub(crate) fn write_block(
        &mut self,
        region: RegionId,
        anchor: u16,
        item: ItemHandle,
        cells: &[u16],
    ) {
        match region {
            RegionId::Slot(name) => {
                if let Some(slot) = self.slot_mut(name) {
                    slot.set(Some(item));
                }
            }
            RegionId::Container(name) => {
                if let Some(container) = self.container_mut(name) {
                    container.write_block(item, anchor, cells);
                }
            }
        }
    }

    fn slot_mut(&mut self, name: SlotName) -> Option<&mut EquipmentSlot> {
        self.slots.iter_mut().find(|slot| slot.name() == name)
    }

    fn container_mut(&mut self, name: ContainerName) -> Option<&mut GridContainer> {
        self.containers
            .iter_mut()
            .find(|container| container.name() == name)
    }
}
