//! # Core subscriber trait.
//!
//! [`Subscribe`] is the extension point for alerting, metrics, and logging.
//! Each subscriber is driven by its own worker loop fed from a bounded queue
//! owned by the [`SubscriberSet`](crate::SubscriberSet).
//!
//! Implementations may be slow (I/O, batching); they never block the
//! publishing worker. If a subscriber's queue overflows, events for that
//! subscriber are dropped and an overflow report is published on the bus.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from a subscriber-dedicated worker task; avoid blocking the async
/// runtime inside `on_event`.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name for warnings about this subscriber.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Capacity of this subscriber's queue; overflow drops events for it.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
