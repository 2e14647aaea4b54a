//! Editor events and listener registries
//!
//! Listeners are invoked synchronously, in registration order, at the point
//! of the call that produced the event. An [`EventBus`] can be attached as a
//! listener when a consumer prefers to drain events from a channel.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kind of change reported by a text-changed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Insert,
    Delete,
    Replace,
    ContentChanged,
}

/// Payload of a text-changed notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChanged {
    pub old_text: String,
    pub new_text: String,
    pub kind: ChangeKind,
}

/// Payload of a command-executed notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandExecuted {
    /// Display name of the command (e.g. "Cut")
    pub command: String,
    pub description: String,
    pub success: bool,
    pub elapsed: Duration,
}

/// Any event the editor publishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditorEvent {
    TextChanged(TextChanged),
    CommandExecuted(CommandExecuted),
}

impl From<TextChanged> for EditorEvent {
    fn from(event: TextChanged) -> Self {
        EditorEvent::TextChanged(event)
    }
}

impl From<CommandExecuted> for EditorEvent {
    fn from(event: CommandExecuted) -> Self {
        EditorEvent::CommandExecuted(event)
    }
}

/// Handle returned on subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Ordered list of listeners for one event category
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(ListenerId, Callback<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it runs after every listener registered before it
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver an event to every registered listener
    pub fn emit(&self, event: &E) {
        for (_, listener) in &self.entries {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// Event bus using bounded crossbeam channels
///
/// Bounded channels provide backpressure. Listeners created by
/// [`EventBus::listener`] never block the editor: when the channel is full
/// the event is dropped and a warning is logged.
pub struct EventBus {
    tx: Sender<EditorEvent>,
    rx: Receiver<EditorEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { tx, rx }
    }

    /// Build a listener that forwards events of type `E` into this bus
    pub fn listener<E>(&self) -> impl Fn(&E) + Send + Sync + 'static
    where
        E: Clone + Into<EditorEvent> + 'static,
    {
        let tx = self.tx.clone();
        move |event: &E| match tx.try_send(event.clone().into()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("event bus full, dropping editor event");
            }
            Err(TrySendError::Disconnected(_)) => {}
        }
    }

    /// Receive the next event with timeout
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EditorEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Try to receive without blocking
    pub fn try_recv(&self) -> Option<EditorEvent> {
        self.rx.try_recv().ok()
    }

    /// Drain up to `max` events
    pub fn drain(&self, max: usize) -> Vec<EditorEvent> {
        let mut events = Vec::with_capacity(max);
        while events.len() < max {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn insert_event(text: &str) -> TextChanged {
        TextChanged {
            old_text: String::new(),
            new_text: text.to_string(),
            kind: ChangeKind::Insert,
        }
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::<TextChanged>::new();

        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            listeners.subscribe(move |_| seen.lock().push(tag));
        }

        listeners.emit(&insert_event("a"));
        assert_eq!(*seen.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::<TextChanged>::new();

        let counter = Arc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.lock() += 1);
        listeners.emit(&insert_event("a"));

        assert_eq!(listeners.len(), 1);
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&insert_event("b"));

        assert_eq!(*count.lock(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_event_bus_listener_forwards() {
        let bus = EventBus::new(10);
        let mut listeners = Listeners::<TextChanged>::new();
        listeners.subscribe(bus.listener::<TextChanged>());

        listeners.emit(&insert_event("hello"));

        match bus.try_recv() {
            Some(EditorEvent::TextChanged(event)) => assert_eq!(event.new_text, "hello"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn test_event_bus_full_drops() {
        let bus = EventBus::new(1);
        let forward = bus.listener::<TextChanged>();
        forward(&insert_event("a"));
        forward(&insert_event("b"));

        assert_eq!(bus.drain(10).len(), 1);
    }

    #[test]
    fn test_editor_event_serializes_with_tag() {
        let event = EditorEvent::from(insert_event("x"));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TextChanged");
        assert_eq!(json["kind"], "Insert");
    }
}
