//! # Runtime events emitted by the supervisor and workers.
//!
//! [`EventKind`] classifies events; [`Event`] carries metadata: a monotonic
//! sequence number, a wall-clock timestamp, and optional runnable name,
//! attempt number, failure reason, and backoff delay.
//!
//! A [`EventKind::RunnableFailed`] event is the failure notification: it is
//! published exactly once per failed attempt and carries the descriptor name
//! plus the error text.
//!
//! ## Ordering
//! `seq` increases monotonically across the whole process; use it to restore
//! ordering when events from different workers interleave.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The supervisor's run loop has started.
    ///
    /// Sets: `at`, `seq`.
    HostStarted,

    /// The supervisor's run loop has exited (all workers drained).
    ///
    /// Sets: `at`, `seq`.
    HostStopped,

    /// A worker is starting a fresh attempt for its runnable.
    ///
    /// Sets: `runnable`, `attempt` (1-based), `at`, `seq`.
    RunnableStarting,

    /// An attempt completed normally (published after the idle backoff).
    ///
    /// Sets: `runnable`, `attempt`, `at`, `seq`.
    RunnableStopped,

    /// An attempt failed; a restart is scheduled. This is the failure
    /// notification delivered to observers.
    ///
    /// Sets: `runnable`, `attempt`, `reason`, `at`, `seq`.
    RunnableFailed,

    /// The failure backoff was scheduled before the next attempt.
    ///
    /// Sets: `runnable`, `attempt`, `delay_ms`, `reason`, `at`, `seq`.
    BackoffScheduled,

    /// A subscriber panicked while handling an event; the panic was contained
    /// and the subscriber's worker keeps going.
    ///
    /// Sets: `reason` (subscriber name + panic info), `at`, `seq`.
    SubscriberPanicked,

    /// An event was dropped for one subscriber (queue full or worker gone).
    ///
    /// Sets: `reason` (subscriber name + cause), `at`, `seq`.
    SubscriberOverflow,
}

/// Runtime event with optional metadata.
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the runnable's descriptor, if applicable.
    pub runnable: Option<Arc<str>>,
    /// Attempt count (1-based, per worker).
    pub attempt: Option<u64>,
    /// Human-readable failure reason.
    pub reason: Option<Arc<str>>,
    /// Backoff delay before the next attempt, in milliseconds.
    pub delay_ms: Option<u64>,
}

impl Event {
    /// Creates an event of the given kind with the current timestamp and the
    /// next sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            runnable: None,
            attempt: None,
            reason: None,
            delay_ms: None,
        }
    }

    /// Attaches the runnable's descriptor name.
    #[inline]
    pub fn with_runnable(mut self, name: impl Into<Arc<str>>) -> Self {
        self.runnable = Some(name.into());
        self
    }

    /// Attaches an attempt count.
    #[inline]
    pub fn with_attempt(mut self, n: u64) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a human-readable failure reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a backoff delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        self.delay_ms = Some(d.as_millis().min(u128::from(u64::MAX)) as u64);
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, cause: &'static str) -> Self {
        Event::now(EventKind::SubscriberOverflow)
            .with_reason(format!("subscriber={subscriber} cause={cause}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::now(EventKind::SubscriberPanicked)
            .with_reason(format!("subscriber={subscriber} panic={info}"))
    }

    /// True for events reporting subscriber trouble. These never trigger
    /// further overflow/panic reports, so the bus cannot feed back on itself.
    #[inline]
    pub fn is_subscriber_report(&self) -> bool {
        matches!(
            self.kind,
            EventKind::SubscriberPanicked | EventKind::SubscriberOverflow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_monotonic() {
        let a = Event::now(EventKind::HostStarted);
        let b = Event::now(EventKind::HostStopped);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn builder_sets_metadata() {
        let ev = Event::now(EventKind::RunnableFailed)
            .with_runnable("mailer")
            .with_attempt(3)
            .with_reason("smtp refused")
            .with_delay(Duration::from_secs(2));

        assert_eq!(ev.kind, EventKind::RunnableFailed);
        assert_eq!(ev.runnable.as_deref(), Some("mailer"));
        assert_eq!(ev.attempt, Some(3));
        assert_eq!(ev.reason.as_deref(), Some("smtp refused"));
        assert_eq!(ev.delay_ms, Some(2000));
    }
}
