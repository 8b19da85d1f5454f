//! Engine event types and the outgoing event queue.
//!
//! The engine reports state changes through three named event kinds
//! rather than through callback lambdas wired into the host. Events
//! accumulate in an [`EventQueue`] while a command executes; the host
//! drains the queue once afterward and refreshes whatever UI each event
//! kind drives (save-action visibility, pin banner, match counter).
//!
//! Everything is synchronous and single-threaded, so the queue is a
//! plain `Vec` drained in emission order.

/// A state-change notification emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The native selection was moved to `[start, end)`.
    SelectionChanged { start: usize, end: usize },

    /// The pin was created, adjusted, cleared, or restored.
    ///
    /// Hosts derive banner state from `is_pin_active()`, not from the
    /// event payload.
    PinChanged,

    /// The search was cleared (highlights removed, match list empty).
    ///
    /// Also emitted on triple-tap: the host's unified banner is driven
    /// through this one channel.
    SearchCleared,
}

/// Ordered queue of pending [`EngineEvent`]s.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<EngineEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn emit(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    /// Removes and returns all pending events in emission order.
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns true if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
