//! # Event subscribers.
//!
//! Observers plug into the runtime by implementing [`Subscribe`] and handing
//! themselves to the [`SupervisorBuilder`](crate::SupervisorBuilder). The
//! [`SubscriberSet`] drives each subscriber from a dedicated worker fed by a
//! bounded queue, so a slow or panicking subscriber can never stall a restart
//! loop.
//!
//! ```text
//! Worker ── publish(Event) ──► Bus ──► listener ──► SubscriberSet::emit(&Event)
//!                                                    ├──► [queue] ─► sub1.on_event()
//!                                                    ├──► [queue] ─► sub2.on_event()
//!                                                    └──► [queue] ─► subN.on_event()
//! ```

mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
