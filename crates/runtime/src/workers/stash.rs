//! Stash worker that owns every actor's authoritative [`Equipment`].
//!
//! Receives commands from [`StashHandle`](crate::api::StashHandle), executes
//! actions via [`StashEngine`], and publishes [`Event`] notifications.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use stash_core::{
    Action, ActionResult, Displacement, Equipment, ErrorSeverity, ExecuteError, ItemsSnapshot,
    LayoutSpec, StashConfig, StashEngine, StashEnv, StashError, TransitionPhase,
};

use crate::api::{ActorId, Result, RuntimeError};
use crate::events::{
    ActionRejected, Event, EventBus, ItemCleared, ItemDropped, ItemMoved, ItemPlaced,
};

/// Commands that can be sent to the stash worker
pub enum Command {
    /// Build an empty aggregate for a new actor from a layout.
    RegisterActor {
        actor: ActorId,
        layout: LayoutSpec,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Execute an action against one actor's equipment.
    Execute {
        actor: ActorId,
        action: Action,
        reply: oneshot::Sender<Result<ActionResult>>,
    },
    /// Query an actor's equipment (read-only snapshot).
    Query {
        actor: ActorId,
        reply: oneshot::Sender<Result<Equipment>>,
    },
    /// Sum of catalog values of everything an actor carries.
    TotalValue {
        actor: ActorId,
        reply: oneshot::Sender<Result<u64>>,
    },
}

/// Background task that processes stash commands one at a time.
pub struct StashWorker {
    actors: HashMap<ActorId, Equipment>,
    catalog: Arc<ItemsSnapshot>,
    config: StashConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl StashWorker {
    pub fn new(
        catalog: Arc<ItemsSnapshot>,
        config: StashConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            actors: HashMap::new(),
            catalog,
            config,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", actors = self.actors.len(), "Stash worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::RegisterActor {
                actor,
                layout,
                reply,
            } => {
                let _ = reply.send(self.register_actor(actor, &layout));
            }
            Command::Execute {
                actor,
                action,
                reply,
            } => {
                let _ = reply.send(self.execute_action(actor, action));
            }
            Command::Query { actor, reply } => {
                let _ = reply.send(self.equipment(actor).cloned());
            }
            Command::TotalValue { actor, reply } => {
                let result = self
                    .equipment(actor)
                    .map(|equipment| equipment.total_value(&*self.catalog));
                let _ = reply.send(result);
            }
        }
    }

    fn equipment(&self, actor: ActorId) -> Result<&Equipment> {
        self.actors
            .get(&actor)
            .ok_or(RuntimeError::UnknownActor(actor))
    }

    fn register_actor(&mut self, actor: ActorId, layout: &LayoutSpec) -> Result<()> {
        let equipment = Equipment::from_layout(layout).map_err(RuntimeError::Layout)?;
        match self.actors.entry(actor) {
            Entry::Occupied(_) => Err(RuntimeError::ActorAlreadyRegistered(actor)),
            Entry::Vacant(entry) => {
                entry.insert(equipment);
                debug!(target: "runtime::worker", %actor, "Actor registered");
                Ok(())
            }
        }
    }

    fn execute_action(&mut self, actor: ActorId, action: Action) -> Result<ActionResult> {
        let equipment = self
            .actors
            .get_mut(&actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;

        // The engine stages on a clone and commits only on success.
        let env = StashEnv::new(self.catalog.as_ref(), &self.config);
        let outcome = StashEngine::new(equipment).execute(env, &action);

        match outcome {
            Ok(result) => {
                self.publish_result(actor, &action, &result);
                Ok(result)
            }
            Err(error) => {
                self.handle_execute_error(actor, &action, &error);
                Err(error.into())
            }
        }
    }

    fn publish_result(&self, actor: ActorId, action: &Action, result: &ActionResult) {
        match (action, result) {
            (Action::Move(_), ActionResult::Move(report)) if !report.changed => {
                debug!(
                    target: "runtime::worker",
                    %actor,
                    item = %report.item,
                    "Move left the equipment unchanged"
                );
            }
            (Action::Move(move_action), ActionResult::Move(report)) => {
                let request = move_action.request;
                info!(
                    target: "runtime::worker",
                    %actor,
                    item = %request.item,
                    source = %request.source,
                    destination = %request.destination,
                    displaced = report.displaced.len(),
                    "Move committed"
                );

                self.event_bus.publish(Event::ItemMoved(ItemMoved {
                    actor,
                    item: request.item,
                    source: request.source,
                    destination: request.destination,
                    displaced: report.displaced.clone(),
                }));

                for displacement in &report.displaced {
                    if let Displacement::Dropped { item } = *displacement {
                        warn!(
                            target: "runtime::worker",
                            %actor,
                            item = %item,
                            destination = %request.destination,
                            "Item dropped from equipment"
                        );
                        self.event_bus.publish(Event::ItemDropped(ItemDropped {
                            actor,
                            item,
                            destination: request.destination,
                        }));
                    }
                }
            }
            (_, ActionResult::Placed(address) | ActionResult::Stowed(address)) => {
                info!(
                    target: "runtime::worker",
                    %actor,
                    action = action.as_snake_case(),
                    item = %action.item(),
                    address = %address,
                    "Item placed"
                );
                self.event_bus.publish(Event::ItemPlaced(ItemPlaced {
                    actor,
                    item: action.item(),
                    address: *address,
                }));
            }
            (_, ActionResult::Cleared) => {
                info!(target: "runtime::worker", %actor, item = %action.item(), "Item cleared");
                self.event_bus.publish(Event::ItemCleared(ItemCleared {
                    actor,
                    item: action.item(),
                }));
            }
            (_, ActionResult::Move(_)) => {
                error!(
                    target: "runtime::worker",
                    %actor,
                    action = action.as_snake_case(),
                    "Engine returned a move report for a non-move action"
                );
            }
        }
    }

    fn handle_execute_error(&self, actor: ActorId, action: &Action, error: &ExecuteError) {
        let phase = error.phase();
        let message = error.to_string();
        let expected = phase != TransitionPhase::PostValidate
            && matches!(
                error.severity(),
                ErrorSeverity::Recoverable | ErrorSeverity::Validation
            );

        if expected {
            debug!(
                target: "runtime::worker",
                %actor,
                action = ?action,
                phase = phase.as_str(),
                code = error.error_code(),
                error = %message,
                "Action rejected"
            );
        } else {
            error!(
                target: "runtime::worker",
                %actor,
                action = ?action,
                phase = phase.as_str(),
                code = error.error_code(),
                error = %message,
                "Action execution failed"
            );
        }

        self.event_bus.publish(Event::ActionRejected(ActionRejected {
            actor,
            action: *action,
            phase,
            code: error.error_code().to_string(),
            error: message,
        }));
    }
}
