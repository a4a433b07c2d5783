use stash_core::{
    Action, ActionResult, CellAddress, ContainerName, Displacement, Equipment, Footprint,
    ItemCategory, ItemDefinition, ItemHandle, ItemsSnapshot, LayoutSpec, MoveError, MoveOutcome,
    MoveRequest, PlacementError, SlotName, StashConfig, StashEngine, StashEnv, SubCategory,
    resolve_move,
};

const SECURITY_HELMET: ItemHandle = ItemHandle(1);
const RIFLE: ItemHandle = ItemHandle(2);
const BANDAGE: ItemHandle = ItemHandle(3);
const SPRAY: ItemHandle = ItemHandle(4);
const CASE: ItemHandle = ItemHandle(5);
const BATTERY: ItemHandle = ItemHandle(6);
const ANTENNA: ItemHandle = ItemHandle(7);
const AMMO_CRATE: ItemHandle = ItemHandle(8);

fn catalog() -> ItemsSnapshot {
    ItemsSnapshot::from_definitions([
        ItemDefinition::new(
            SECURITY_HELMET,
            "security_helmet",
            ItemCategory::Gear,
            SubCategory::Helmet,
            Footprint::SINGLE,
        )
        .with_value(250),
        ItemDefinition::new(
            RIFLE,
            "compact_rifle",
            ItemCategory::Weapon,
            SubCategory::Weapon,
            Footprint::SINGLE,
        )
        .with_value(1200),
        ItemDefinition::new(
            BANDAGE,
            "bandage",
            ItemCategory::Consumable,
            SubCategory::Medical,
            Footprint::SINGLE,
        )
        .with_value(40)
        .with_max_stack(5),
        ItemDefinition::new(
            SPRAY,
            "med_spray",
            ItemCategory::Consumable,
            SubCategory::Medical,
            Footprint::SINGLE,
        )
        .with_value(90),
        ItemDefinition::new(
            CASE,
            "weapon_case",
            ItemCategory::Gear,
            SubCategory::Misc,
            Footprint::new(2, 2),
        )
        .with_value(700),
        ItemDefinition::new(
            BATTERY,
            "battery_pack",
            ItemCategory::Valuable,
            SubCategory::Misc,
            Footprint::new(2, 1),
        )
        .with_value(300),
        ItemDefinition::new(
            ANTENNA,
            "antenna",
            ItemCategory::Valuable,
            SubCategory::Misc,
            Footprint::new(1, 2),
        )
        .with_value(150),
        ItemDefinition::new(
            AMMO_CRATE,
            "ammo_crate",
            ItemCategory::Gear,
            SubCategory::Misc,
            Footprint::new(2, 2),
        )
        .with_value(400),
    ])
    .expect("catalog should be valid")
}

fn empty_equipment() -> Equipment {
    Equipment::from_layout(&LayoutSpec::standard()).expect("standard layout should resolve")
}

fn slot(name: SlotName) -> CellAddress {
    CellAddress::slot(name)
}

fn rig(cell: u16) -> CellAddress {
    CellAddress::container(ContainerName::Rig, cell)
}

fn bag(cell: u16) -> CellAddress {
    CellAddress::container(ContainerName::Bag, cell)
}

fn backpack(cell: u16) -> CellAddress {
    CellAddress::container(ContainerName::Backpack, cell)
}

fn applied(outcome: MoveOutcome) -> (Equipment, Vec<Displacement>) {
    match outcome {
        MoveOutcome::Applied(applied) => (applied.equipment, applied.displaced),
        MoveOutcome::Unchanged => panic!("move should have changed the aggregate"),
    }
}

// ============================================================================
// Simple swap
// ============================================================================

#[test]
fn test_helmet_moves_into_empty_pocket() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, SECURITY_HELMET, slot(SlotName::Helmet))
        .expect("helmet should fit its slot");

    let request = MoveRequest::new(
        SECURITY_HELMET,
        slot(SlotName::Helmet),
        slot(SlotName::Pocket0),
    );
    let (next, displaced) =
        applied(resolve_move(&start, &catalog, &request, &StashConfig::default()).unwrap());

    assert!(displaced.is_empty());
    assert_eq!(next.slot(SlotName::Helmet).unwrap().item(), None);
    assert_eq!(next.slot(SlotName::Pocket0).unwrap().item(), Some(SECURITY_HELMET));
    assert_eq!(next.check_integrity(&catalog), Ok(()));

    // Snapshot-and-replace: the input aggregate is untouched.
    assert_eq!(start.anchor_at(slot(SlotName::Helmet)), Some(SECURITY_HELMET));
}

#[test]
fn test_round_trip_swap_between_pockets_restores_state() {
    let catalog = catalog();
    let config = StashConfig::default();
    let start = empty_equipment()
        .place(&catalog, BANDAGE, slot(SlotName::Pocket0))
        .unwrap()
        .place(&catalog, SPRAY, slot(SlotName::Pocket1))
        .unwrap();

    let there = MoveRequest::new(BANDAGE, slot(SlotName::Pocket0), slot(SlotName::Pocket1));
    let (middle, displaced) = applied(resolve_move(&start, &catalog, &there, &config).unwrap());
    assert_eq!(
        displaced,
        vec![Displacement::Swapped {
            item: SPRAY,
            to: slot(SlotName::Pocket0)
        }]
    );
    assert_eq!(middle.anchor_at(slot(SlotName::Pocket0)), Some(SPRAY));
    assert_eq!(middle.anchor_at(slot(SlotName::Pocket1)), Some(BANDAGE));

    let back = MoveRequest::new(BANDAGE, slot(SlotName::Pocket1), slot(SlotName::Pocket0));
    let (end, _) = applied(resolve_move(&middle, &catalog, &back, &config).unwrap());
    assert_eq!(end, start);
}

#[test]
fn test_swap_across_region_topologies() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, SPRAY, slot(SlotName::Pocket2))
        .unwrap()
        .place(&catalog, BANDAGE, rig(2))
        .unwrap();

    let request = MoveRequest::new(SPRAY, slot(SlotName::Pocket2), rig(2));
    let (next, displaced) =
        applied(resolve_move(&start, &catalog, &request, &StashConfig::default()).unwrap());

    assert_eq!(
        displaced,
        vec![Displacement::Swapped {
            item: BANDAGE,
            to: slot(SlotName::Pocket2)
        }]
    );
    assert_eq!(next.anchor_at(rig(2)), Some(SPRAY));
    assert_eq!(next.anchor_at(slot(SlotName::Pocket2)), Some(BANDAGE));
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_two_by_two_at_column_one_is_rejected() {
    let catalog = catalog();
    let start = empty_equipment().place(&catalog, CASE, bag(0)).unwrap();

    let request = MoveRequest::new(CASE, bag(0), rig(1));
    let error = resolve_move(&start, &catalog, &request, &StashConfig::default())
        .expect_err("column 1 + width 2 overflows a width-2 grid");
    assert!(matches!(
        error,
        MoveError::Placement {
            error: PlacementError::Bounds(_),
            ..
        }
    ));
}

#[test]
fn test_weapon_into_helmet_slot_is_rejected() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, RIFLE, slot(SlotName::Primary))
        .unwrap();

    let request = MoveRequest::new(RIFLE, slot(SlotName::Primary), slot(SlotName::Helmet));
    let error = resolve_move(&start, &catalog, &request, &StashConfig::default()).unwrap_err();
    assert!(matches!(
        error,
        MoveError::Placement {
            error: PlacementError::CategoryNotAllowed {
                slot: SlotName::Helmet,
                sub_category: SubCategory::Weapon,
            },
            ..
        }
    ));

    // A multi-cell item never fits a slot, restricted or not.
    let start = empty_equipment().place(&catalog, BATTERY, rig(0)).unwrap();
    let request = MoveRequest::new(BATTERY, rig(0), slot(SlotName::Pocket0));
    assert!(matches!(
        resolve_move(&start, &catalog, &request, &StashConfig::default()),
        Err(MoveError::Placement {
            error: PlacementError::FootprintNotSingle { .. },
            ..
        })
    ));
}

#[test]
fn test_item_missing_from_stated_source_is_rejected() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, SPRAY, slot(SlotName::Pocket0))
        .unwrap();

    let wrong_source = MoveRequest::new(SPRAY, slot(SlotName::Pocket1), rig(0));
    assert!(matches!(
        resolve_move(&start, &catalog, &wrong_source, &StashConfig::default()),
        Err(MoveError::ItemNotAtSource { .. })
    ));

    let unknown = MoveRequest::new(ItemHandle(999), slot(SlotName::Pocket0), rig(0));
    assert_eq!(
        resolve_move(&start, &catalog, &unknown, &StashConfig::default()),
        Err(MoveError::ItemNotFound(ItemHandle(999)))
    );
}

// ============================================================================
// Self-move
// ============================================================================

#[test]
fn test_self_move_is_a_no_op() {
    let catalog = catalog();
    let start = empty_equipment().place(&catalog, CASE, rig(0)).unwrap();

    let request = MoveRequest::new(CASE, rig(0), rig(0));
    assert_eq!(
        resolve_move(&start, &catalog, &request, &StashConfig::default()),
        Ok(MoveOutcome::Unchanged)
    );
}

// ============================================================================
// Covered-cell source
// ============================================================================

#[test]
fn test_case_named_by_a_covered_cell_swaps_with_a_case() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, CASE, rig(0))
        .unwrap()
        .place(&catalog, AMMO_CRATE, bag(0))
        .unwrap();

    // Bottom-right cell of the case stands in for the whole item.
    let request = MoveRequest::new(CASE, rig(3), bag(0));
    let (next, displaced) =
        applied(resolve_move(&start, &catalog, &request, &StashConfig::default()).unwrap());

    assert_eq!(
        displaced,
        vec![Displacement::Swapped {
            item: AMMO_CRATE,
            to: rig(0)
        }]
    );
    assert_eq!(next.anchor_at(rig(0)), Some(AMMO_CRATE));
    assert_eq!(next.item_at(rig(3)), Some(AMMO_CRATE));
    assert_eq!(next.anchor_at(bag(0)), Some(CASE));
    assert_eq!(next.item_at(bag(3)), Some(CASE));
    assert_eq!(next.check_integrity(&catalog), Ok(()));

    let strict = StashConfig::with_allow_lost_blockers(false);
    let (strict_next, _) = applied(resolve_move(&start, &catalog, &request, &strict).unwrap());
    assert_eq!(strict_next, next);
}

// ============================================================================
// Lost blocker
// ============================================================================

#[test]
fn test_blocker_that_cannot_swap_back_leaves_the_aggregate() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, SPRAY, slot(SlotName::Pocket0))
        .unwrap()
        .place(&catalog, CASE, rig(0))
        .unwrap();

    let request = MoveRequest::new(SPRAY, slot(SlotName::Pocket0), rig(0));
    let (next, displaced) =
        applied(resolve_move(&start, &catalog, &request, &StashConfig::default()).unwrap());

    assert_eq!(displaced, vec![Displacement::Dropped { item: CASE }]);
    assert!(!next.contains(CASE));
    assert_eq!(next.anchor_at(rig(0)), Some(SPRAY));
    assert_eq!(next.item_at(rig(1)), None);
    assert_eq!(next.item_at(rig(3)), None);
    assert_eq!(next.item_at(slot(SlotName::Pocket0)), None);
    assert_eq!(next.check_integrity(&catalog), Ok(()));
}

#[test]
fn test_lost_blocker_is_refused_when_disabled() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, SPRAY, slot(SlotName::Pocket0))
        .unwrap()
        .place(&catalog, CASE, rig(0))
        .unwrap();

    let request = MoveRequest::new(SPRAY, slot(SlotName::Pocket0), rig(0));
    let strict = StashConfig::with_allow_lost_blockers(false);
    assert!(matches!(
        resolve_move(&start, &catalog, &request, &strict),
        Err(MoveError::BlockerWouldBeLost { blocker: CASE, .. })
    ));
}

// ============================================================================
// Compound containers
// ============================================================================

#[test]
fn test_backpack_sub_grids_keep_blocks_apart() {
    let catalog = catalog();
    let start = empty_equipment()
        .place(&catalog, ANTENNA, rig(0))
        .unwrap()
        .place(&catalog, BATTERY, bag(0))
        .unwrap();

    // The 2x1 tail of the backpack takes the battery.
    let request = MoveRequest::new(BATTERY, bag(0), backpack(4));
    let (next, _) = applied(resolve_move(&start, &catalog, &request, &StashConfig::default()).unwrap());
    assert_eq!(next.anchor_at(backpack(4)), Some(BATTERY));
    assert_eq!(next.item_at(backpack(5)), Some(BATTERY));

    // The antenna may not straddle the seam between rows 1 and 2.
    let request = MoveRequest::new(ANTENNA, rig(0), backpack(2));
    assert!(matches!(
        resolve_move(&next, &catalog, &request, &StashConfig::default()),
        Err(MoveError::Placement {
            error: PlacementError::Bounds(_),
            ..
        })
    ));

    let request = MoveRequest::new(ANTENNA, rig(0), backpack(1));
    let (next, _) = applied(resolve_move(&next, &catalog, &request, &StashConfig::default()).unwrap());
    assert_eq!(next.item_at(backpack(3)), Some(ANTENNA));
    assert_eq!(next.check_integrity(&catalog), Ok(()));
}

// ============================================================================
// Aggregate operations through the engine
// ============================================================================

#[test]
fn test_engine_stow_clear_and_total_value() {
    let catalog = catalog();
    let config = StashConfig::default();
    let env = StashEnv::new(&catalog, &config);
    let mut equipment = empty_equipment();

    {
        let mut engine = StashEngine::new(&mut equipment);
        for item in [SECURITY_HELMET, RIFLE, CASE, BATTERY] {
            let result = engine
                .execute(env, &Action::stow(item))
                .expect("empty equipment has room");
            assert!(matches!(result, ActionResult::Stowed(_)));
        }
    }

    assert_eq!(equipment.locate(SECURITY_HELMET), Some(slot(SlotName::Helmet)));
    assert_eq!(equipment.locate(RIFLE), Some(slot(SlotName::Primary)));
    assert_eq!(equipment.locate(CASE), Some(rig(0)));
    assert_eq!(equipment.locate(BATTERY), Some(bag(0)));
    assert_eq!(equipment.total_value(&catalog), 250 + 1200 + 700 + 300);

    {
        let mut engine = StashEngine::new(&mut equipment);
        engine
            .execute(env, &Action::clear(CASE))
            .expect("case is stored");
    }
    assert!(!equipment.contains(CASE));
    assert!(equipment.item_at(rig(3)).is_none());
    assert_eq!(equipment.total_value(&catalog), 250 + 1200 + 300);
    assert_eq!(equipment.items(), vec![SECURITY_HELMET, RIFLE, BATTERY]);
}
