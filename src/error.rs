//! Error types used by the runhost runtime and runnables.
//!
//! Two enums:
//!
//! - [`RuntimeError`] — lifecycle misuse and runtime-level failures surfaced
//!   by the [`Host`](crate::Host).
//! - [`RunnableError`] — outcomes of a single execution attempt, including
//!   the graceful [`RunnableError::Canceled`] exit.

use thiserror::Error;

/// # Errors surfaced by the host lifecycle.
///
/// These are programmer errors (out-of-order `start`/`stop`) or failures of
/// the runtime task itself. They are reported to the caller immediately and
/// never retried.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// `start` was called while the supervisor is already running.
    #[error("host is already started")]
    AlreadyStarted,

    /// `stop` was called without a preceding `start`.
    #[error("host is not started")]
    NotStarted,

    /// The background run task could not be joined (it panicked or was aborted).
    #[error("supervisor task failed to join: {reason}")]
    JoinFailed {
        /// Description of the join failure.
        reason: String,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for logs/metrics.
    ///
    /// # Example
    /// ```
    /// use runhost::RuntimeError;
    ///
    /// assert_eq!(RuntimeError::AlreadyStarted.as_label(), "host_already_started");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::AlreadyStarted => "host_already_started",
            RuntimeError::NotStarted => "host_not_started",
            RuntimeError::JoinFailed { .. } => "host_join_failed",
        }
    }
}

/// # Outcomes of a single runnable attempt.
///
/// A runnable is expected to run until told to stop; returning
/// [`RunnableError::Canceled`] after observing its token is the graceful
/// shutdown path and is never treated as a failure.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RunnableError {
    /// The attempt failed; a fresh instance will be started after the failure
    /// backoff elapses.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The attempt observed cancellation and unwound cooperatively.
    #[error("cancelled")]
    Canceled,
}

impl RunnableError {
    /// Convenience constructor for [`RunnableError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        RunnableError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for logs/metrics.
    ///
    /// # Example
    /// ```
    /// use runhost::RunnableError;
    ///
    /// assert_eq!(RunnableError::fail("boom").as_label(), "runnable_failed");
    /// assert_eq!(RunnableError::Canceled.as_label(), "runnable_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunnableError::Fail { .. } => "runnable_failed",
            RunnableError::Canceled => "runnable_canceled",
        }
    }

    /// True for the graceful cancellation exit.
    pub fn is_canceled(&self) -> bool {
        matches!(self, RunnableError::Canceled)
    }
}
