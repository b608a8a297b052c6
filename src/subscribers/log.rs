//! # Stdout logging subscriber for debugging and demos.
//!
//! Output format:
//! ```text
//! [host-started]
//! [starting] runnable=mailer attempt=1
//! [failed] runnable=mailer attempt=1 err="smtp refused"
//! [backoff] runnable=mailer delay_ms=2000 after_attempt=1
//! [stopped] runnable=mailer attempt=1
//! [host-stopped]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Intended for development and the demos;
/// implement a custom [`Subscribe`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::HostStarted => println!("[host-started]"),
            EventKind::HostStopped => println!("[host-stopped]"),
            EventKind::RunnableStarting => {
                if let (Some(name), Some(att)) = (&e.runnable, e.attempt) {
                    println!("[starting] runnable={name} attempt={att}");
                }
            }
            EventKind::RunnableStopped => {
                if let Some(name) = &e.runnable {
                    println!("[stopped] runnable={name} attempt={:?}", e.attempt);
                }
            }
            EventKind::RunnableFailed => {
                println!(
                    "[failed] runnable={:?} attempt={:?} err={:?}",
                    e.runnable, e.attempt, e.reason
                );
            }
            EventKind::BackoffScheduled => {
                println!(
                    "[backoff] runnable={:?} delay_ms={:?} after_attempt={:?}",
                    e.runnable, e.delay_ms, e.attempt
                );
            }
            EventKind::SubscriberOverflow => {
                println!("[subscriber-overflow] {:?}", e.reason);
            }
            EventKind::SubscriberPanicked => {
                println!("[subscriber-panicked] {:?}", e.reason);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
