//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use super::types::{DialogueEvent, SessionEvent};

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Player movement, map switches, loads.
    Session,
    /// Dialogue open/reveal/close.
    Dialogue,
}

/// Event wrapper that carries the topic and typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Session(SessionEvent),
    Dialogue(DialogueEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Session(_) => Topic::Session,
            Event::Dialogue(_) => Topic::Dialogue,
        }
    }
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about and only receive those
/// events. The channel set is fixed at construction, so publishing never
/// needs a lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();
        channels.insert(Topic::Session, broadcast::channel(capacity).0);
        channels.insert(Topic::Dialogue, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its topic. Best-effort: events for topics nobody
    /// subscribed to are dropped.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            tracing::trace!("no subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels
            .get(&topic)
            .expect("topic channel initialized at construction")
            .subscribe()
    }

    /// Subscribe to several topics at once.
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

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Position;

    #[tokio::test]
    async fn events_route_to_their_topic_only() {
        let bus = EventBus::new();
        let mut session_rx = bus.subscribe(Topic::Session);
        let mut dialogue_rx = bus.subscribe(Topic::Dialogue);

        bus.publish(Event::Session(SessionEvent::PlayerMoved {
            position: Position::new(2, 1),
        }));
        bus.publish(Event::Dialogue(DialogueEvent::Closed));

        assert!(matches!(
            session_rx.recv().await.unwrap(),
            Event::Session(SessionEvent::PlayerMoved { .. })
        ));
        assert!(matches!(
            dialogue_rx.recv().await.unwrap(),
            Event::Dialogue(DialogueEvent::Closed)
        ));
        assert!(session_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_not_an_error() {
        let bus = EventBus::new();
        bus.publish(Event::Dialogue(DialogueEvent::Closed));
    }
}
