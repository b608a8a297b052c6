//! # Runtime configuration.
//!
//! [`Config`] centralizes the supervisor's timing constants and the event bus
//! capacity. The defaults reproduce the runtime's contract timings:
//!
//! - `poll_interval = 2s`: re-discovery wait while the registry is empty
//! - `restart_delay = 1s`: idle backoff after a normal completion (cancellable)
//! - `failure_backoff = 2s`: backoff after a failed attempt (not cancellable)
//!
//! Changing these shifts the observable restart cadence; tests pin the defaults.

use std::time::Duration;

/// Configuration for the supervisor runtime.
///
/// ## Field semantics
/// - `poll_interval`: wait between discovery cycles while no runnables are
///   registered; the wait observes cancellation.
/// - `restart_delay`: idle time inserted between consecutive attempts after a
///   normal completion; the wait observes cancellation.
/// - `failure_backoff`: idle time inserted after a failed attempt (including a
///   failed scope acquisition). This wait does **not** observe cancellation,
///   which bounds restart storms at the cost of delaying shutdown by up to one
///   interval after a failure.
/// - `bus_capacity`: ring-buffer size of the broadcast event bus (min 1;
///   clamped by [`Bus`](crate::Bus)). Slow receivers that lag further than this
///   observe `Lagged` and skip older events.
#[derive(Clone, Debug)]
pub struct Config {
    /// Wait between discovery cycles while the registry snapshot is empty.
    pub poll_interval: Duration,
    /// Idle backoff between attempts after a normal completion.
    pub restart_delay: Duration,
    /// Backoff after a failed attempt; ignores cancellation.
    pub failure_backoff: Duration,
    /// Capacity of the event bus broadcast channel.
    pub bus_capacity: usize,
}

impl Config {
    /// Returns the bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Contract timings: poll 2s, idle backoff 1s, failure backoff 2s,
    /// bus capacity 1024.
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            restart_delay: Duration::from_secs(1),
            failure_backoff: Duration::from_secs(2),
            bus_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract_timings() {
        let cfg = Config::default();
        assert_eq!(cfg.poll_interval, Duration::from_secs(2));
        assert_eq!(cfg.restart_delay, Duration::from_secs(1));
        assert_eq!(cfg.failure_backoff, Duration::from_secs(2));
    }

    #[test]
    fn bus_capacity_is_clamped() {
        let cfg = Config {
            bus_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }
}
