//! Runtime events: types and broadcast bus.
//!
//! Everything the runtime wants observers to see flows through here: worker
//! lifecycle events (starting/stopped/failed), scheduled backoffs, and the
//! supervisor's own start/stop markers.
//!
//! - [`EventKind`], [`Event`] — classification and payload metadata
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! Publishers are the supervisor and its workers; the single consumer wired by
//! the runtime is the listener that fans events out to a
//! [`SubscriberSet`](crate::SubscriberSet). Additional consumers can call
//! [`Bus::subscribe`] directly (tests do).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
