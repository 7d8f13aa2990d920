//! Event dispatch system
//!
//! Unified event handling for the host toolkit boundary. The host delivers
//! pointer events with 2D deltas; widgets register handlers per event type.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Drag event (pointer down + move), carries a 2D delta
    pub const DRAG: EventType = 6;
    /// Drag ended (pointer up after drag)
    pub const DRAG_END: EventType = 7;
    pub const RESIZE: EventType = 40;

    // Widget lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
        pressure: f32,
    },
    /// Accumulated pointer movement since the previous drag event
    Drag {
        delta_x: f32,
        delta_y: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

impl Event {
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Build a drag event carrying a movement delta.
    pub fn drag(target: u64, delta_x: f32, delta_y: f32, timestamp: u64) -> Self {
        Self {
            event_type: event_types::DRAG,
            target,
            data: EventData::Drag { delta_x, delta_y },
            timestamp,
            propagation_stopped: false,
        }
    }

    /// Build a drag-end event (pointer released after a drag).
    pub fn drag_end(target: u64, timestamp: u64) -> Self {
        Self {
            event_type: event_types::DRAG_END,
            target,
            data: EventData::None,
            timestamp,
            propagation_stopped: false,
        }
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), Vec<EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a widget and event type
    pub fn register<F>(&mut self, widget_id: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((widget_id, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            tracing::trace!(
                widget_id = event.target,
                event_type = event.event_type,
                handlers = handlers.len(),
                "dispatching event"
            );
            for handler in handlers {
                if event.propagation_stopped {
                    break;
                }
                handler(event);
            }
        }
    }

    /// Number of registered (widget, event type) handler slots
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_dispatch_to_registered_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(7, event_types::DRAG, move |event| {
            if let EventData::Drag { delta_x, delta_y } = event.data {
                seen_clone.lock().unwrap().push((delta_x, delta_y));
            }
        });

        let mut event = Event::drag(7, 3.0, -1.5, 16);
        dispatcher.dispatch(&mut event);

        assert_eq!(*seen.lock().unwrap(), vec![(3.0, -1.5)]);
    }

    #[test]
    fn test_dispatch_ignores_other_targets() {
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(1, event_types::DRAG_END, move |_| {
            *count_clone.lock().unwrap() += 1;
        });

        let mut event = Event::drag_end(2, 0);
        dispatcher.dispatch(&mut event);
        assert_eq!(*count.lock().unwrap(), 0);

        let mut event = Event::drag_end(1, 0);
        dispatcher.dispatch(&mut event);
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_stop_propagation() {
        let count = Arc::new(Mutex::new(0));

        let mut dispatcher = EventDispatcher::new();
        let first = count.clone();
        dispatcher.register(1, event_types::POINTER_DOWN, move |_| {
            *first.lock().unwrap() += 1;
        });
        let second = count.clone();
        dispatcher.register(1, event_types::POINTER_DOWN, move |_| {
            *second.lock().unwrap() += 1;
        });

        let mut event = Event {
            event_type: event_types::POINTER_DOWN,
            target: 1,
            data: EventData::None,
            timestamp: 0,
            propagation_stopped: true,
        };
        dispatcher.dispatch(&mut event);
        assert_eq!(*count.lock().unwrap(), 0);
    }
}
