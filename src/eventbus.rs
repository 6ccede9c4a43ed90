use crate::event::{PadEvent, PadEventListener};
use std::collections::HashMap;

/// Determines which events a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    /// Only [`PadEvent::Connected`] / [`PadEvent::Disconnected`].
    ConnectivityOnly,
    /// Only [`PadEvent::SelectionChanged`].
    SelectionOnly,
    Custom(fn(&PadEvent) -> bool),
}

/// Metadata-wrapped listener with filter and control flag.
struct ListenerEntry {
    listener: Box<dyn PadEventListener>,
    enabled: bool,
    filter: EventFilter,
}

/// Explicit observer registry for arbitration events.
///
/// Events are delivered to every enabled, matching listener in the order they
/// were published, so intra-tick ordering (connectivity before selection) is
/// observable without any UI attached.
pub struct EventBus {
    next_id: u64,
    listeners: HashMap<u64, ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: HashMap::new(),
        }
    }

    /// Registers a listener with a filter; returns its handle.
    pub fn add_listener(&mut self, listener: impl PadEventListener + 'static, filter: EventFilter) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Emits one event to all active and matching listeners.
    fn emit(&mut self, event: &PadEvent) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }

            let passes_filter = match entry.filter {
                EventFilter::All => true,
                EventFilter::ConnectivityOnly => matches!(
                    event,
                    PadEvent::Connected(_) | PadEvent::Disconnected(_)
                ),
                EventFilter::SelectionOnly => matches!(event, PadEvent::SelectionChanged(_)),
                EventFilter::Custom(f) => f(event),
            };

            if passes_filter {
                entry.listener.on_event(event);
            }
        }
    }

    /// Emits a batch of events, in order, to matching listeners.
    pub fn emit_all(&mut self, events: &[PadEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
