//! Runtime core: discovery, restart loops, and lifecycle.
//!
//! Internal modules:
//! - [`worker`]: per-descriptor restart loop (fresh instance per attempt,
//!   asymmetric backoff, failure containment);
//! - [`supervisor`]: discovery snapshot + fan-out, runs until cancelled;
//! - [`builder`]: wires bus, subscriber set, and listener;
//! - [`host`]: start/stop adapter with drain-on-stop.

mod builder;
mod host;
mod supervisor;
mod worker;

pub use builder::SupervisorBuilder;
pub use host::Host;
pub use supervisor::Supervisor;
