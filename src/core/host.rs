//! # Host: start/stop adapter for an embedding process.
//!
//! [`Host`] bridges [`Supervisor::run`] to whatever lifecycle contract the
//! embedding process uses ("start a background subsystem / stop and drain
//! it"). It owns the stop token and the background task handle, and enforces
//! strictly alternating start/stop:
//!
//! - `start` while running → [`RuntimeError::AlreadyStarted`]
//! - `stop` while stopped → [`RuntimeError::NotStarted`]
//!
//! `stop` cancels and then awaits the run task until every restart loop has
//! observed cancellation and released its attempt — a clean join, not a
//! forced termination. A runnable that never observes its token will stall
//! the drain; cancellation is cooperative by contract.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::core::supervisor::Supervisor;
use crate::error::RuntimeError;

struct Running {
    stop: CancellationToken,
    run: JoinHandle<()>,
}

/// Start/stop adapter around a [`Supervisor`].
pub struct Host {
    supervisor: Arc<Supervisor>,
    state: Mutex<Option<Running>>,
}

impl Host {
    /// Wraps a supervisor; the host starts out stopped.
    pub fn new(supervisor: Arc<Supervisor>) -> Self {
        Self {
            supervisor,
            state: Mutex::new(None),
        }
    }

    /// Starts the supervisor in the background.
    ///
    /// The internal stop token is derived from `token`, so cancelling the
    /// caller's token also shuts the runtime down; `stop` cancels only the
    /// internal one. Returns without waiting for the run to finish.
    ///
    /// # Errors
    /// [`RuntimeError::AlreadyStarted`] if a run is already in flight.
    pub async fn start(&self, token: &CancellationToken) -> Result<(), RuntimeError> {
        let mut state = self.state.lock().await;
        if state.is_some() {
            return Err(RuntimeError::AlreadyStarted);
        }

        let stop = token.child_token();
        let run = {
            let supervisor = Arc::clone(&self.supervisor);
            let token = stop.clone();
            tokio::spawn(async move { supervisor.run(token).await })
        };

        *state = Some(Running { stop, run });
        Ok(())
    }

    /// Signals shutdown and waits for the run to fully drain.
    ///
    /// Afterwards the host is stopped and a future `start` is valid. The
    /// state lock is held across the drain, so a racing `start` waits instead
    /// of overlapping the old run.
    ///
    /// # Errors
    /// - [`RuntimeError::NotStarted`] if there is no run in flight.
    /// - [`RuntimeError::JoinFailed`] if the run task panicked.
    pub async fn stop(&self) -> Result<(), RuntimeError> {
        let mut state = self.state.lock().await;
        let running = state.take().ok_or(RuntimeError::NotStarted)?;

        running.stop.cancel();
        running.run.await.map_err(|e| RuntimeError::JoinFailed {
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// True if a run is currently in flight.
    pub async fn is_started(&self) -> bool {
        self.state.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::RunnableError;
    use crate::events::EventKind;
    use crate::runnables::{DescriptorRef, FnDescriptor, RunnableFn, StaticRegistry};

    fn blocker(name: &'static str) -> DescriptorRef {
        FnDescriptor::arc(name, || {
            Ok(Box::new(RunnableFn::new(|ctx: CancellationToken| async move {
                ctx.cancelled().await;
                Err(RunnableError::Canceled)
            })) as _)
        })
    }

    fn host_with(descriptors: Vec<DescriptorRef>) -> Host {
        let registry = Arc::new(StaticRegistry::new(descriptors));
        Host::new(Supervisor::builder(Config::default(), registry).build())
    }

    #[tokio::test(start_paused = true)]
    async fn double_start_is_rejected() {
        let host = host_with(vec![blocker("job")]);
        let token = CancellationToken::new();

        host.start(&token).await.unwrap();
        let err = host.start(&token).await.unwrap_err();
        assert!(matches!(err, RuntimeError::AlreadyStarted));

        host.stop().await.unwrap();
    }

    #[tokio::test]
    async fn stop_before_start_is_rejected() {
        let host = host_with(vec![blocker("job")]);
        let err = host.stop().await.unwrap_err();
        assert!(matches!(err, RuntimeError::NotStarted));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_drains_and_start_resumes() {
        let host = host_with(vec![blocker("job")]);
        let mut rx = host.supervisor.bus().subscribe();
        let token = CancellationToken::new();

        host.start(&token).await.unwrap();
        loop {
            let ev = rx.recv().await.unwrap();
            if ev.kind == EventKind::RunnableStarting {
                break;
            }
        }
        host.stop().await.unwrap();
        assert!(!host.is_started().await);

        // Quiet after the drain: no attempts start while stopped.
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        let mut started_while_stopped = 0;
        while let Ok(ev) = rx.try_recv() {
            if ev.kind == EventKind::RunnableStarting {
                started_while_stopped += 1;
            }
        }
        assert_eq!(started_while_stopped, 0);

        // A fresh start resumes normal operation.
        host.start(&token).await.unwrap();
        loop {
            let ev = rx.recv().await.unwrap();
            if ev.kind == EventKind::RunnableStarting {
                break;
            }
        }
        host.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn external_token_cancellation_propagates() {
        let host = host_with(vec![blocker("job")]);
        let token = CancellationToken::new();

        host.start(&token).await.unwrap();
        token.cancel();

        // The run drains on the external signal; stop still performs the
        // state transition and join.
        host.stop().await.unwrap();
        assert!(!host.is_started().await);
    }
}
