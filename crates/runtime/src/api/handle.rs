//! Cloneable façade for issuing commands to the runtime.
//!
//! [`StashHandle`] hides channel plumbing and offers typed async helpers for
//! every action the engine understands.
use tokio::sync::{broadcast, mpsc, oneshot};

use stash_core::{
    Action, ActionResult, CellAddress, Equipment, ItemHandle, LayoutSpec, MoveReport,
};

use super::ActorId;
use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct StashHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl StashHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Creates empty equipment for `actor` from `layout`.
    pub async fn register_actor(&self, actor: ActorId, layout: LayoutSpec) -> Result<()> {
        self.request(|reply| Command::RegisterActor {
            actor,
            layout,
            reply,
        })
        .await?
    }

    /// Executes any action against `actor`'s equipment.
    ///
    /// Rejections surface as [`RuntimeError::Execute`]; the equipment is left
    /// untouched in that case.
    pub async fn execute(&self, actor: ActorId, action: Action) -> Result<ActionResult> {
        self.request(|reply| Command::Execute {
            actor,
            action,
            reply,
        })
        .await?
    }

    /// Relocates `item` from `source` to `destination`, swapping or dropping
    /// whatever occupied the destination.
    pub async fn move_item(
        &self,
        actor: ActorId,
        item: ItemHandle,
        source: CellAddress,
        destination: CellAddress,
    ) -> Result<MoveReport> {
        let action = Action::move_item(item, source, destination);
        match self.execute(actor, action).await? {
            ActionResult::Move(report) => Ok(report),
            _ => Err(RuntimeError::UnexpectedResult {
                action: action.as_snake_case(),
            }),
        }
    }

    /// Puts an item that is not yet carried into empty cells at `address`.
    pub async fn place_item(
        &self,
        actor: ActorId,
        item: ItemHandle,
        address: CellAddress,
    ) -> Result<CellAddress> {
        let action = Action::place(item, address);
        match self.execute(actor, action).await? {
            ActionResult::Placed(address) => Ok(address),
            _ => Err(RuntimeError::UnexpectedResult {
                action: action.as_snake_case(),
            }),
        }
    }

    /// Puts an item at the first free address that accepts it.
    pub async fn stow_item(&self, actor: ActorId, item: ItemHandle) -> Result<CellAddress> {
        let action = Action::stow(item);
        match self.execute(actor, action).await? {
            ActionResult::Stowed(address) => Ok(address),
            _ => Err(RuntimeError::UnexpectedResult {
                action: action.as_snake_case(),
            }),
        }
    }

    pub async fn clear_item(&self, actor: ActorId, item: ItemHandle) -> Result<()> {
        let action = Action::clear(item);
        match self.execute(actor, action).await? {
            ActionResult::Cleared => Ok(()),
            _ => Err(RuntimeError::UnexpectedResult {
                action: action.as_snake_case(),
            }),
        }
    }

    /// Query an actor's equipment (read-only snapshot)
    pub async fn query(&self, actor: ActorId) -> Result<Equipment> {
        self.request(|reply| Command::Query { actor, reply }).await?
    }

    pub async fn total_value(&self, actor: ActorId) -> Result<u64> {
        self.request(|reply| Command::TotalValue { actor, reply })
            .await?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Equipment` - Committed moves, placements and clears
    /// - `Topic::Loss` - Items dropped by a move
    /// - `Topic::Rejection` - Actions the engine refused
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
