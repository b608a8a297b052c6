//! # Supervisor: discovery snapshot and worker fan-out.
//!
//! [`Supervisor::run`] queries the [`Registry`] for the current descriptor
//! set, spawns one [`Worker`](super::worker::Worker) per descriptor into a
//! [`JoinSet`], and blocks until every worker has returned. Workers only
//! return on cancellation, so once any descriptor exists that join lasts for
//! the rest of the operational lifetime; the re-discovery wait (2s,
//! cancellable) only matters while the registry is still empty. The
//! discovered set is fixed once non-empty — this is a "wait for the first
//! runnable" poll, not a live-reload mechanism.
//!
//! ```text
//! run(token):
//!   publish HostStarted
//!   while !cancelled:
//!     snapshot = registry.list()
//!     if !snapshot.is_empty():
//!       spawn Worker per descriptor (child tokens) ─► join all
//!     if !cancelled:
//!       sleep poll_interval (cancellable)
//!   publish HostStopped
//! ```

use std::sync::Arc;

use tokio::{select, task::JoinSet, time};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::builder::SupervisorBuilder;
use crate::core::worker::Worker;
use crate::events::{Bus, Event, EventKind};
use crate::runnables::Registry;
use crate::subscribers::SubscriberSet;

/// Coordinates discovery, per-runnable restart loops, and drained shutdown.
///
/// Construct through [`Supervisor::builder`]; run through
/// [`Host`](crate::Host) or by awaiting [`Supervisor::run`] directly.
pub struct Supervisor {
    pub(crate) cfg: Config,
    pub(crate) registry: Arc<dyn Registry>,
    pub(crate) bus: Bus,
    #[allow(dead_code)] // owned so subscriber workers live as long as the runtime
    pub(crate) subs: Arc<SubscriberSet>,
}

impl Supervisor {
    /// Starts building a supervisor over the given registry.
    pub fn builder(cfg: Config, registry: Arc<dyn Registry>) -> SupervisorBuilder {
        SupervisorBuilder::new(cfg, registry)
    }

    /// The event bus; subscribe here for raw event access (tests, ad-hoc
    /// observers). Durable observers should implement
    /// [`Subscribe`](crate::Subscribe) instead.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Runs until `token` is cancelled and every spawned worker has drained.
    ///
    /// All worker failures are contained inside the workers; this loop itself
    /// has no failure mode and simply suspends for the runtime's lifetime.
    pub async fn run(&self, token: CancellationToken) {
        self.bus.publish(Event::now(EventKind::HostStarted));

        while !token.is_cancelled() {
            let snapshot = self.registry.list();

            if !snapshot.is_empty() {
                let mut set = JoinSet::new();
                for descriptor in snapshot {
                    let worker = Worker::new(descriptor, self.bus.clone(), &self.cfg);
                    set.spawn(worker.run(token.child_token()));
                }
                while set.join_next().await.is_some() {}
            }

            if !token.is_cancelled() {
                let sleep = time::sleep(self.cfg.poll_interval);
                tokio::pin!(sleep);
                select! {
                    _ = &mut sleep => {}
                    _ = token.cancelled() => {}
                }
            }
        }

        self.bus.publish(Event::now(EventKind::HostStopped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnableError;
    use crate::runnables::{DescriptorRef, FnDescriptor, RunnableFn, StaticRegistry};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingRegistry {
        queries: AtomicUsize,
        descriptors: Vec<DescriptorRef>,
    }

    impl Registry for CountingRegistry {
        fn list(&self) -> Vec<DescriptorRef> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.descriptors.clone()
        }
    }

    fn blocker(name: &'static str) -> DescriptorRef {
        FnDescriptor::arc(name, || {
            Ok(Box::new(RunnableFn::new(|ctx: tokio_util::sync::CancellationToken| async move {
                ctx.cancelled().await;
                Err(RunnableError::Canceled)
            })) as _)
        })
    }

    #[tokio::test(start_paused = true)]
    async fn empty_registry_polls_every_two_seconds() {
        let registry = Arc::new(CountingRegistry {
            queries: AtomicUsize::new(0),
            descriptors: Vec::new(),
        });
        let sup = Supervisor::builder(Config::default(), registry.clone()).build();

        let mut rx = sup.bus().subscribe();
        let token = CancellationToken::new();
        let run = {
            let sup = Arc::clone(&sup);
            let token = token.clone();
            tokio::spawn(async move { sup.run(token).await })
        };

        // Discovery at t=0s, 2s, 4s, 6s; cancel mid-sleep at 6.9s.
        time::sleep(Duration::from_millis(6900)).await;
        token.cancel();
        run.await.unwrap();

        assert_eq!(registry.queries.load(Ordering::SeqCst), 4);
        // Nothing was ever executed.
        let mut saw_starting = false;
        while let Ok(ev) = rx.try_recv() {
            if ev.kind == EventKind::RunnableStarting {
                saw_starting = true;
            }
        }
        assert!(!saw_starting);
    }

    #[tokio::test(start_paused = true)]
    async fn picks_up_descriptor_appearing_after_empty_polls() {
        struct LateRegistry {
            queries: AtomicUsize,
            descriptor: DescriptorRef,
        }

        impl Registry for LateRegistry {
            fn list(&self) -> Vec<DescriptorRef> {
                // Empty for the first two discovery cycles.
                if self.queries.fetch_add(1, Ordering::SeqCst) < 2 {
                    Vec::new()
                } else {
                    vec![self.descriptor.clone()]
                }
            }
        }

        let registry = Arc::new(LateRegistry {
            queries: AtomicUsize::new(0),
            descriptor: blocker("late"),
        });
        let sup = Supervisor::builder(Config::default(), registry).build();

        let mut rx = sup.bus().subscribe();
        let token = CancellationToken::new();
        let started_at = tokio::time::Instant::now();
        let run = {
            let sup = Arc::clone(&sup);
            let token = token.clone();
            tokio::spawn(async move { sup.run(token).await })
        };

        loop {
            let ev = rx.recv().await.unwrap();
            if ev.kind == EventKind::RunnableStarting {
                break;
            }
        }
        // Two empty cycles at t=0s and t=2s; the third query at t=4s finds it.
        assert_eq!(started_at.elapsed(), Duration::from_secs(4));

        token.cancel();
        run.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn spawns_one_worker_per_descriptor() {
        let registry = Arc::new(StaticRegistry::new(vec![blocker("alpha"), blocker("beta")]));
        let sup = Supervisor::builder(Config::default(), registry).build();

        let mut rx = sup.bus().subscribe();
        let token = CancellationToken::new();
        let run = {
            let sup = Arc::clone(&sup);
            let token = token.clone();
            tokio::spawn(async move { sup.run(token).await })
        };

        let mut names = Vec::new();
        while names.len() < 2 {
            let ev = rx.recv().await.unwrap();
            if ev.kind == EventKind::RunnableStarting {
                names.push(ev.runnable.unwrap().to_string());
            }
        }
        names.sort();
        assert_eq!(names, ["alpha", "beta"]);

        token.cancel();
        run.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn run_returns_only_after_workers_drain() {
        let registry = Arc::new(StaticRegistry::new(vec![blocker("drainee")]));
        let sup = Supervisor::builder(Config::default(), registry).build();

        let mut rx = sup.bus().subscribe();
        let token = CancellationToken::new();
        let run = {
            let sup = Arc::clone(&sup);
            let token = token.clone();
            tokio::spawn(async move { sup.run(token).await })
        };

        loop {
            let ev = rx.recv().await.unwrap();
            if ev.kind == EventKind::RunnableStarting {
                break;
            }
        }
        token.cancel();
        run.await.unwrap();

        // HostStopped is the last event published by run; once run has
        // returned it must already be on the bus, with no starting after it.
        let mut stopped_seen = false;
        while let Ok(ev) = rx.try_recv() {
            match ev.kind {
                EventKind::HostStopped => stopped_seen = true,
                EventKind::RunnableStarting => panic!("attempt started after drain"),
                _ => {}
            }
        }
        assert!(stopped_seen);
    }
}
