//! # Broadcast bus for runtime events.
//!
//! [`Bus`] wraps [`tokio::sync::broadcast`] so that workers can publish
//! lifecycle events without ever blocking on their observers.
//!
//! - **Non-blocking publish**: `publish()` calls `broadcast::Sender::send` and
//!   returns immediately; a worker is never stalled by a slow observer.
//! - **Bounded**: one ring buffer of recent events shared by all receivers;
//!   receivers that lag observe `RecvError::Lagged(n)` and skip `n` items.
//! - **No persistence**: events published with no active receiver are dropped.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for runtime events.
///
/// Cheap to clone (the sender is `Arc`-backed); many publishers, any number of
/// independent receivers.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a bus with the given ring-buffer capacity (clamped to 1).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to all active receivers; never blocks.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates an independent receiver observing subsequent events only.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
