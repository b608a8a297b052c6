//! # Worker: restart loop for one descriptor.
//!
//! A [`Worker`] keeps a single runnable alive until cancellation. Every
//! attempt gets a brand-new instance from [`Descriptor::begin`]; the instance
//! is dropped when the attempt (including its backoff) ends, so resources are
//! released and no state survives into the next attempt.
//!
//! ## Attempt flow
//! ```text
//! loop while not cancelled:
//!   ├─► descriptor.begin()            fresh scope + instance
//!   │     └─ Err ─► publish RunnableFailed ─► sleep failure_backoff ─► retry
//!   ├─► publish RunnableStarting
//!   ├─► instance.run(token)
//!   │     ├─ Ok        ─► sleep restart_delay (cancellable) ─► publish RunnableStopped
//!   │     ├─ Canceled  ─► nothing published (shutdown path)
//!   │     └─ Err       ─► publish RunnableFailed + BackoffScheduled
//!   │                     ─► sleep failure_backoff (ignores cancellation)
//!   └─► drop(instance)
//! ```
//!
//! ## Backoff asymmetry
//! The idle backoff after a normal completion observes cancellation, so
//! shutdown during that pause is immediate. The failure backoff does not:
//! restart storms stay bounded even when shutdown and a failure race, at the
//! cost of delaying shutdown by up to one failure-backoff interval. Do not
//! make the failure sleep cancellable; the timing is contractual and tested.
//!
//! ## Containment
//! An error from one attempt never escapes the loop. It is published on the
//! bus (exactly one `RunnableFailed` per failed attempt) and followed by a
//! fresh attempt.

use std::time::Duration;

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::RunnableError;
use crate::events::{Bus, Event, EventKind};
use crate::runnables::DescriptorRef;

/// Restart loop for a single descriptor.
pub(crate) struct Worker {
    descriptor: DescriptorRef,
    bus: Bus,
    restart_delay: Duration,
    failure_backoff: Duration,
}

impl Worker {
    pub(crate) fn new(descriptor: DescriptorRef, bus: Bus, cfg: &Config) -> Self {
        Self {
            descriptor,
            bus,
            restart_delay: cfg.restart_delay,
            failure_backoff: cfg.failure_backoff,
        }
    }

    /// Runs attempts sequentially until `token` is cancelled.
    ///
    /// Never returns before cancellation is observed; cancellation is checked
    /// at the loop head, during the runnable's execution (via the token handed
    /// to it), and during the idle backoff.
    pub(crate) async fn run(self, token: CancellationToken) {
        let mut attempt: u64 = 0;

        while !token.is_cancelled() {
            attempt += 1;

            let mut instance = match self.descriptor.begin() {
                Ok(instance) => instance,
                Err(e) => {
                    // Acquisition failures follow the same report/backoff/retry
                    // path as a failed run.
                    self.publish_failed(attempt, &e);
                    time::sleep(self.failure_backoff).await;
                    continue;
                }
            };

            self.bus.publish(
                Event::now(EventKind::RunnableStarting)
                    .with_runnable(self.descriptor.name())
                    .with_attempt(attempt),
            );

            match instance.run(token.clone()).await {
                Ok(()) => {
                    if !token.is_cancelled() {
                        let sleep = time::sleep(self.restart_delay);
                        tokio::pin!(sleep);
                        select! {
                            _ = &mut sleep => {}
                            _ = token.cancelled() => {}
                        }
                    }
                    self.bus.publish(
                        Event::now(EventKind::RunnableStopped)
                            .with_runnable(self.descriptor.name())
                            .with_attempt(attempt),
                    );
                }
                Err(RunnableError::Canceled) => {
                    // Expected shutdown path; the loop head exits.
                }
                Err(e) => {
                    self.publish_failed(attempt, &e);
                    self.bus.publish(
                        Event::now(EventKind::BackoffScheduled)
                            .with_runnable(self.descriptor.name())
                            .with_attempt(attempt)
                            .with_delay(self.failure_backoff)
                            .with_reason(e.to_string()),
                    );
                    // Deliberately not cancellable.
                    time::sleep(self.failure_backoff).await;
                }
            }
            // `instance` drops here: the attempt's scope is released on every
            // path before the next attempt begins.
        }
    }

    fn publish_failed(&self, attempt: u64, e: &RunnableError) {
        self.bus.publish(
            Event::now(EventKind::RunnableFailed)
                .with_runnable(self.descriptor.name())
                .with_attempt(attempt)
                .with_reason(e.to_string()),
        );
    }
}
