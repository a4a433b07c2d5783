use stash_content::ContentFactory;
use stash_core::{
    CellAddress, ContainerName, Displacement, Footprint, ItemCategory, ItemDefinition,
    ItemHandle, ItemsSnapshot, LayoutSpec, SlotName, StashConfig, StashError, SubCategory,
    TransitionPhase,
};
use stash_runtime::events::{ActionRejected, ItemDropped, ItemMoved, ItemPlaced};
use stash_runtime::{ActorId, Event, RuntimeError, StashRuntime, Topic};

const HELMET: ItemHandle = ItemHandle(1);
const SPRAY: ItemHandle = ItemHandle(2);
const CASE: ItemHandle = ItemHandle(3);
const RIFLE: ItemHandle = ItemHandle(4);

const OPERATOR: ActorId = ActorId(1);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn catalog() -> ItemsSnapshot {
    ItemsSnapshot::from_definitions([
        ItemDefinition::new(
            HELMET,
            "security_helmet",
            ItemCategory::Gear,
            SubCategory::Helmet,
            Footprint::SINGLE,
        )
        .with_value(250),
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
            RIFLE,
            "compact_rifle",
            ItemCategory::Weapon,
            SubCategory::Weapon,
            Footprint::SINGLE,
        )
        .with_value(1200),
    ])
    .expect("catalog should be valid")
}

fn rig(cell: u16) -> CellAddress {
    CellAddress::container(ContainerName::Rig, cell)
}

async fn start(config: StashConfig) -> StashRuntime {
    init_tracing();
    StashRuntime::builder()
        .stash_config(config)
        .catalog(catalog())
        .build()
        .await
        .expect("runtime should start")
}

// ============================================================================
// Committed actions
// ============================================================================

#[tokio::test]
async fn test_move_commits_and_publishes() {
    let runtime = start(StashConfig::default()).await;
    let handle = runtime.handle();

    handle
        .register_actor(OPERATOR, LayoutSpec::standard())
        .await
        .expect("registration should succeed");

    let mut placed_rx = handle.subscribe(Topic::Equipment);

    let helmet_at = handle.stow_item(OPERATOR, HELMET).await.unwrap();
    let spray_at = handle.stow_item(OPERATOR, SPRAY).await.unwrap();
    assert_eq!(helmet_at, CellAddress::slot(SlotName::Helmet));
    assert_eq!(spray_at, CellAddress::slot(SlotName::Pocket0));

    assert_eq!(
        placed_rx.recv().await.unwrap(),
        Event::ItemPlaced(ItemPlaced {
            actor: OPERATOR,
            item: HELMET,
            address: helmet_at,
        })
    );
    assert!(matches!(placed_rx.recv().await.unwrap(), Event::ItemPlaced(_)));

    let report = handle
        .move_item(OPERATOR, SPRAY, spray_at, rig(3))
        .await
        .expect("move into an empty cell should succeed");
    assert!(report.changed);
    assert!(report.displaced.is_empty());

    assert_eq!(
        placed_rx.recv().await.unwrap(),
        Event::ItemMoved(ItemMoved {
            actor: OPERATOR,
            item: SPRAY,
            source: spray_at,
            destination: rig(3),
            displaced: vec![],
        })
    );

    let equipment = handle.query(OPERATOR).await.unwrap();
    assert_eq!(equipment.anchor_at(rig(3)), Some(SPRAY));
    assert_eq!(equipment.item_at(spray_at), None);
    assert_eq!(handle.total_value(OPERATOR).await.unwrap(), 340);

    drop(placed_rx);
    drop(handle);
    runtime.shutdown().await.expect("shutdown should succeed");
}

#[tokio::test]
async fn test_swap_round_trip_through_handle() {
    let runtime = start(StashConfig::default()).await;
    let handle = runtime.handle();
    handle
        .register_actor(OPERATOR, LayoutSpec::standard())
        .await
        .unwrap();

    let pocket0 = CellAddress::slot(SlotName::Pocket0);
    let pocket1 = CellAddress::slot(SlotName::Pocket1);
    handle.place_item(OPERATOR, SPRAY, pocket0).await.unwrap();
    handle.place_item(OPERATOR, HELMET, pocket1).await.unwrap();
    let before = handle.query(OPERATOR).await.unwrap();

    let report = handle
        .move_item(OPERATOR, SPRAY, pocket0, pocket1)
        .await
        .unwrap();
    assert_eq!(
        report.displaced,
        vec![Displacement::Swapped {
            item: HELMET,
            to: pocket0
        }]
    );

    handle
        .move_item(OPERATOR, SPRAY, pocket1, pocket0)
        .await
        .unwrap();
    assert_eq!(handle.query(OPERATOR).await.unwrap(), before);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

// ============================================================================
// Rejections and losses
// ============================================================================

#[tokio::test]
async fn test_rejected_move_leaves_equipment_untouched() {
    let runtime = start(StashConfig::default()).await;
    let handle = runtime.handle();
    handle
        .register_actor(OPERATOR, LayoutSpec::standard())
        .await
        .unwrap();

    let case_at = handle.stow_item(OPERATOR, CASE).await.unwrap();
    assert_eq!(case_at, rig(0));
    let before = handle.query(OPERATOR).await.unwrap();

    let mut rejection_rx = handle.subscribe(Topic::Rejection);
    let helmet_slot = CellAddress::slot(SlotName::Helmet);

    let result = handle.move_item(OPERATOR, CASE, case_at, helmet_slot).await;
    let Err(RuntimeError::Execute(error)) = result else {
        panic!("expected an execute error, got {result:?}");
    };
    assert_eq!(error.phase(), TransitionPhase::Apply);
    assert_eq!(error.error_code(), "PLACEMENT_FOOTPRINT_NOT_SINGLE");

    let Event::ActionRejected(ActionRejected {
        actor, phase, code, ..
    }) = rejection_rx.recv().await.unwrap()
    else {
        panic!("expected a rejection event");
    };
    assert_eq!(actor, OPERATOR);
    assert_eq!(phase, TransitionPhase::Apply);
    assert_eq!(code, "PLACEMENT_FOOTPRINT_NOT_SINGLE");

    assert_eq!(handle.query(OPERATOR).await.unwrap(), before);

    // Clearing something that is not carried is rejected before anything runs.
    let result = handle.clear_item(OPERATOR, RIFLE).await;
    let Err(RuntimeError::Execute(error)) = result else {
        panic!("expected an execute error, got {result:?}");
    };
    assert_eq!(error.phase(), TransitionPhase::PreValidate);
    assert_eq!(error.error_code(), "CLEAR_NOT_PRESENT");

    drop(rejection_rx);
    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_lost_blocker_is_reported() {
    let runtime = start(StashConfig::default()).await;
    let handle = runtime.handle();
    handle
        .register_actor(OPERATOR, LayoutSpec::standard())
        .await
        .unwrap();

    handle.stow_item(OPERATOR, CASE).await.unwrap();
    let spray_at = handle.stow_item(OPERATOR, SPRAY).await.unwrap();

    let mut loss_rx = handle.subscribe(Topic::Loss);

    // The 2x2 case cannot swap back into a pocket.
    let report = handle
        .move_item(OPERATOR, SPRAY, spray_at, rig(0))
        .await
        .expect("lost blockers are allowed by default");
    assert_eq!(report.displaced, vec![Displacement::Dropped { item: CASE }]);

    assert_eq!(
        loss_rx.recv().await.unwrap(),
        Event::ItemDropped(ItemDropped {
            actor: OPERATOR,
            item: CASE,
            destination: rig(0),
        })
    );

    let equipment = handle.query(OPERATOR).await.unwrap();
    assert!(!equipment.contains(CASE));
    assert_eq!(handle.total_value(OPERATOR).await.unwrap(), 90);

    drop(loss_rx);
    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_strict_config_refuses_lost_blocker() {
    let runtime = start(StashConfig::with_allow_lost_blockers(false)).await;
    let handle = runtime.handle();
    handle
        .register_actor(OPERATOR, LayoutSpec::standard())
        .await
        .unwrap();

    handle.stow_item(OPERATOR, CASE).await.unwrap();
    let spray_at = handle.stow_item(OPERATOR, SPRAY).await.unwrap();

    let result = handle.move_item(OPERATOR, SPRAY, spray_at, rig(0)).await;
    let Err(RuntimeError::Execute(error)) = result else {
        panic!("expected an execute error, got {result:?}");
    };
    assert_eq!(error.error_code(), "MOVE_BLOCKER_WOULD_BE_LOST");
    assert_eq!(handle.total_value(OPERATOR).await.unwrap(), 790);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

// ============================================================================
// Actor registry
// ============================================================================

#[tokio::test]
async fn test_actor_registry_errors() {
    let runtime = start(StashConfig::default()).await;
    let handle = runtime.handle();

    assert!(matches!(
        handle.query(ActorId(9)).await,
        Err(RuntimeError::UnknownActor(ActorId(9)))
    ));
    assert!(matches!(
        handle.stow_item(ActorId(9), SPRAY).await,
        Err(RuntimeError::UnknownActor(ActorId(9)))
    ));

    handle
        .register_actor(OPERATOR, LayoutSpec::standard())
        .await
        .unwrap();
    assert!(matches!(
        handle.register_actor(OPERATOR, LayoutSpec::standard()).await,
        Err(RuntimeError::ActorAlreadyRegistered(OPERATOR))
    ));
    assert!(matches!(
        handle.register_actor(ActorId(2), LayoutSpec::new()).await,
        Err(RuntimeError::Layout(_))
    ));

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_build_requires_catalog() {
    let result = StashRuntime::builder().build().await;
    assert!(matches!(result, Err(RuntimeError::MissingCatalog)));
}

#[tokio::test]
async fn test_actors_are_isolated_under_concurrent_commands() {
    let runtime = start(StashConfig::default()).await;
    let handle = runtime.handle();
    let actors = [ActorId(1), ActorId(2), ActorId(3)];

    for actor in actors {
        handle
            .register_actor(actor, LayoutSpec::standard())
            .await
            .unwrap();
    }

    let mut tasks = Vec::new();
    for actor in actors {
        for item in [HELMET, SPRAY, CASE, RIFLE] {
            let handle = handle.clone();
            tasks.push(tokio::spawn(async move {
                handle.stow_item(actor, item).await
            }));
        }
    }
    for task in tasks {
        task.await
            .expect("task should not panic")
            .expect("every item fits an empty loadout");
    }

    let catalog = catalog();
    for actor in actors {
        let equipment = handle.query(actor).await.unwrap();
        assert_eq!(equipment.items().len(), 4);
        assert_eq!(equipment.check_integrity(&catalog), Ok(()));
        assert_eq!(handle.total_value(actor).await.unwrap(), 2240);
    }

    drop(handle);
    runtime.shutdown().await.unwrap();
}

// ============================================================================
// Content-driven startup
// ============================================================================

#[tokio::test]
async fn test_runtime_from_shipped_content() {
    init_tracing();
    let factory = ContentFactory::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../stash/content/data"
    ));

    let runtime = StashRuntime::builder()
        .content(&factory)
        .expect("shipped content should load")
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let layout = factory.load_layout().expect("layout.toml should load");
    handle.register_actor(OPERATOR, layout).await.unwrap();

    let weapon_case = ItemHandle(8);
    let case_at = handle.stow_item(OPERATOR, weapon_case).await.unwrap();
    assert_eq!(case_at, rig(0));
    assert_eq!(handle.total_value(OPERATOR).await.unwrap(), 700);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[test]
fn test_events_serialize() {
    let event = Event::ItemMoved(ItemMoved {
        actor: OPERATOR,
        item: SPRAY,
        source: CellAddress::slot(SlotName::Pocket0),
        destination: rig(1),
        displaced: vec![Displacement::Dropped { item: CASE }],
    });

    let json = serde_json::to_string(&event).expect("event should serialize");
    let decoded: Event = serde_json::from_str(&json).expect("event should deserialize");
    assert_eq!(decoded, event);
    assert_eq!(decoded.topic(), Topic::Equipment);
}
