//! # SubscriberSet: non-blocking fan-out to subscribers.
//!
//! Distributes each [`Event`] to every subscriber without awaiting them:
//! `emit(&Event)` returns immediately, each subscriber sees events in FIFO
//! order through its own queue, and a panic inside a subscriber is caught
//! without affecting the others.
//!
//! Subscriber trouble is itself observable: a dropped event publishes
//! [`EventKind::SubscriberOverflow`](crate::EventKind::SubscriberOverflow) and
//! a contained panic publishes
//! [`EventKind::SubscriberPanicked`](crate::EventKind::SubscriberPanicked)
//! back on the bus. Those report events never generate further reports when
//! they themselves are dropped or panic a handler, so the loop cannot feed
//! back on itself.
//!
//! Not guaranteed: global ordering across subscribers, and delivery on queue
//! overflow (events are dropped for the lagging subscriber only).

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use crate::events::{Bus, Event};

use super::Subscribe;

struct SubscriberChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<Event>>,
}

/// Fan-out over per-subscriber bounded queues and worker tasks.
pub struct SubscriberSet {
    channels: Vec<SubscriberChannel>,
    workers: Vec<JoinHandle<()>>,
    bus: Bus,
}

impl SubscriberSet {
    /// Creates the set and spawns one worker per subscriber.
    ///
    /// The bus is where overflow/panic reports are published.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>, bus: Bus) -> Self {
        let mut channels = Vec::with_capacity(subs.len());
        let mut workers = Vec::with_capacity(subs.len());

        for sub in subs {
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<Event>>(sub.queue_capacity().max(1));
            let worker_bus = bus.clone();

            let handle = tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let handler = sub.on_event(ev.as_ref());
                    let outcome = std::panic::AssertUnwindSafe(handler).catch_unwind().await;
                    if let Err(panic_err) = outcome {
                        if !ev.is_subscriber_report() {
                            worker_bus.publish(Event::subscriber_panicked(
                                sub.name(),
                                format!("{panic_err:?}"),
                            ));
                        }
                    }
                }
            });

            channels.push(SubscriberChannel { name, sender: tx });
            workers.push(handle);
        }

        Self {
            channels,
            workers,
            bus,
        }
    }

    /// Fans one event out to all subscribers without blocking.
    ///
    /// A full queue or a gone worker drops the event for that subscriber and
    /// publishes a [`SubscriberOverflow`](crate::EventKind::SubscriberOverflow)
    /// report on the bus.
    pub fn emit(&self, event: &Event) {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            let cause = match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => continue,
                Err(TrySendError::Full(_)) => "queue_full",
                Err(TrySendError::Closed(_)) => "worker_closed",
            };
            if !ev.is_subscriber_report() {
                self.bus.publish(Event::subscriber_overflow(channel.name, cause));
            }
        }
    }

    /// Closes all queues and awaits worker completion.
    pub async fn shutdown(self) {
        drop(self.channels);
        for h in self.workers {
            let _ = h.await;
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}
