// SPDX-License-Identifier: MIT

//! Change-event fan-out to connected browser clients.
//!
//! Every successful mutation publishes a named event on a broadcast
//! channel; the `/api/events` WebSocket forwards them as JSON frames.
//! Publishing never blocks a request: with no subscribers the event is
//! simply dropped, and a lagging subscriber skips missed events.

use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// One change notification, serialized as `{"event": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent {
    pub event: String,
    pub data: Value,
}

impl ChangeEvent {
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }
}

/// Broadcast sender shared through [`crate::AppState`].
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish an event to all connected clients.
    pub fn publish(&self, event: impl Into<String>, data: Value) {
        let event = ChangeEvent::new(event, data);
        tracing::debug!(event = %event.event, "Publishing change event");
        // No subscribers is fine; the event just goes nowhere.
        let _ = self.tx.send(event);
    }

    /// Subscribe to future change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
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
    use serde_json::json;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish("member-added", json!({"id": "1"}));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event, "member-added");
        assert_eq!(event.data, json!({"id": "1"}));
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.publish("club-updated", json!({}));
    }
}
