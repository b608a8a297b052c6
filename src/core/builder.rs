//! Builder wiring the supervisor's runtime pieces together.
//!
//! Construction happens once, inside a tokio runtime: the bus is created from
//! the configured capacity, the [`SubscriberSet`] spawns its per-subscriber
//! workers, and a single listener task forwards bus events into the set.
//! Wiring the listener here (rather than in `run`) keeps repeated
//! start/stop cycles from stacking up forwarders.

use std::sync::Arc;

use crate::config::Config;
use crate::core::supervisor::Supervisor;
use crate::events::Bus;
use crate::runnables::Registry;
use crate::subscribers::{Subscribe, SubscriberSet};

/// Builder for a [`Supervisor`].
pub struct SupervisorBuilder {
    cfg: Config,
    registry: Arc<dyn Registry>,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl SupervisorBuilder {
    /// Creates a builder with the given configuration and registry.
    pub fn new(cfg: Config, registry: Arc<dyn Registry>) -> Self {
        Self {
            cfg,
            registry,
            subscribers: Vec::new(),
        }
    }

    /// Sets the event subscribers (alerting, metrics, logging).
    ///
    /// Each subscriber gets a dedicated worker and bounded queue; see
    /// [`SubscriberSet`].
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the supervisor and wires the bus-to-subscribers listener.
    ///
    /// Must be called within a tokio runtime (workers are spawned here).
    pub fn build(self) -> Arc<Supervisor> {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let subs = Arc::new(SubscriberSet::new(self.subscribers, bus.clone()));

        if !subs.is_empty() {
            let mut rx = bus.subscribe();
            let set = Arc::clone(&subs);
            tokio::spawn(async move {
                loop {
                    match rx.recv().await {
                        Ok(ev) => set.emit(&ev),
                        // Skipped events are gone; keep forwarding.
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {}
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                    }
                }
            });
        }

        Arc::new(Supervisor {
            cfg: self.cfg,
            registry: self.registry,
            bus,
            subs,
        })
    }
}
