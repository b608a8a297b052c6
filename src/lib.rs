//! # runhost
//!
//! **runhost** keeps a set of long-lived async units of work running.
//!
//! It discovers *runnables* through a registry, executes each one in its own
//! restart loop, and brings a fresh instance up whenever an attempt completes
//! or fails. Shutdown is cooperative and fully drained: `stop` returns only
//! once every loop has observed cancellation and released its attempt.
//!
//! ## Architecture
//! ```text
//!     Host ── start()/stop() ─────────────────────────────┐
//!       │                                                 │
//!       ▼                                                 │
//! ┌───────────────────────────────────────────────┐       │
//! │  Supervisor (discovery / fan-out loop)        │       │
//! │  - Registry::list() snapshot per cycle        │       │
//! │  - one Worker per Descriptor (JoinSet)        │       │
//! │  - polls every 2s while the registry is empty │       │
//! └──────┬──────────────────┬─────────────────────┘       │
//!        ▼                  ▼                             │
//!   ┌──────────┐      ┌──────────┐     CancellationToken ◄┘
//!   │  Worker  │      │  Worker  │     (child per worker)
//!   │ (restart │      │ (restart │
//!   │   loop)  │      │   loop)  │
//!   └────┬─────┘      └────┬─────┘
//!        │ publishes       │ publishes
//!        ▼                 ▼
//! ┌───────────────────────────────────────────────┐
//! │            Bus (broadcast channel)            │
//! └──────────────────────┬────────────────────────┘
//!                        ▼
//!                  SubscriberSet
//!              (per-subscriber queues)
//! ```
//!
//! ## Restart loop
//! Each worker runs one descriptor forever, until cancelled:
//! ```text
//! loop {
//!   ├─► descriptor.begin()          fresh instance, fresh resources
//!   ├─► publish RunnableStarting
//!   ├─► instance.run(token)
//!   │     ├─ Ok        ─► sleep 1s (cancellable) ─► publish RunnableStopped
//!   │     ├─ Canceled  ─► (shutdown path, nothing published)
//!   │     └─ Err       ─► publish RunnableFailed + BackoffScheduled
//!   │                     ─► sleep 2s (NOT cancellable; storm prevention)
//!   └─► drop(instance)              attempt scope released on every path
//! }
//! ```
//! The failure backoff deliberately ignores cancellation, so shutdown after a
//! failing attempt can lag by up to two seconds. The idle backoff does observe
//! cancellation and aborts immediately.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use runhost::{Config, FnDescriptor, Host, RunnableFn, StaticRegistry, Supervisor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ticker = FnDescriptor::arc("ticker", || {
//!         Ok(Box::new(RunnableFn::new(|ctx: CancellationToken| async move {
//!             while !ctx.is_cancelled() {
//!                 tokio::time::sleep(std::time::Duration::from_millis(250)).await;
//!             }
//!             Ok(())
//!         })) as _)
//!     });
//!
//!     let registry = Arc::new(StaticRegistry::new(vec![ticker]));
//!     let supervisor = Supervisor::builder(Config::default(), registry).build();
//!
//!     let host = Host::new(supervisor);
//!     host.start(&CancellationToken::new()).await?;
//!     tokio::signal::ctrl_c().await?;
//!     host.stop().await?;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod runnables;
mod subscribers;

pub use config::Config;
pub use core::{Host, Supervisor, SupervisorBuilder};
pub use error::{RunnableError, RuntimeError};
pub use events::{Bus, Event, EventKind};
pub use runnables::{
    Descriptor, DescriptorRef, FnDescriptor, Registry, Runnable, RunnableFn, StaticRegistry,
};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: stdout event logger for demos.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
