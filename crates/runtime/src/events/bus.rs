//! Broadcast channels keyed by [`Topic`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{ActionRejected, ItemCleared, ItemDropped, ItemMoved, ItemPlaced};

/// Coarse event categories; each has its own broadcast channel.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Committed changes (moves, placements, clears)
    Equipment,
    /// Items that left an aggregate because a move evicted them
    Loss,
    /// Actions refused by the engine
    Rejection,
}

/// Everything the stash worker announces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    ItemMoved(ItemMoved),
    ItemDropped(ItemDropped),
    ItemPlaced(ItemPlaced),
    ItemCleared(ItemCleared),
    ActionRejected(ActionRejected),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::ItemMoved(_) | Event::ItemPlaced(_) | Event::ItemCleared(_) => Topic::Equipment,
            Event::ItemDropped(_) => Topic::Loss,
            Event::ActionRejected(_) => Topic::Rejection,
        }
    }
}

/// Fan-out point shared by the worker and every [`StashHandle`](crate::StashHandle).
///
/// Events published to a topic nobody listens on are discarded.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<TopicChannels>,
}

struct TopicChannels {
    equipment: broadcast::Sender<Event>,
    loss: broadcast::Sender<Event>,
    rejection: broadcast::Sender<Event>,
}

impl TopicChannels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Equipment => &self.equipment,
            Topic::Loss => &self.loss,
            Topic::Rejection => &self.rejection,
        }
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// `capacity` bounds each topic channel; slow receivers lag past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(TopicChannels {
                equipment: broadcast::channel(capacity).0,
                loss: broadcast::channel(capacity).0,
                rejection: broadcast::channel(capacity).0,
            }),
        }
    }

    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            tracing::trace!(?topic, "Event discarded, no subscribers");
        }
    }

    /// Receiver for one topic, starting at the next published event.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.get(topic).subscribe()
    }

    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
