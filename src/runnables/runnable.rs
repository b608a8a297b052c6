//! # The unit of work.
//!
//! A [`Runnable`] runs until told to stop or until it fails. The runtime
//! constructs a fresh instance for every attempt (see
//! [`Descriptor::begin`](crate::Descriptor::begin)) and drops it when the
//! attempt ends, so no state survives from one attempt to the next. Whatever
//! the instance owns — connections, buffers, temp files — is the attempt's
//! scope and is released by `Drop` on every exit path.
//!
//! Implementations should check their token regularly and return promptly
//! during shutdown; cancellation is cooperative and cannot be forced.

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::RunnableError;

/// # Long-running, cancelable unit of work.
///
/// `run` is invoked exactly once per instance. Returning `Ok(())` schedules a
/// restart after the idle backoff; returning [`RunnableError::Fail`] schedules
/// one after the failure backoff; returning [`RunnableError::Canceled`] after
/// observing the token is the graceful shutdown path.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use async_trait::async_trait;
/// use runhost::{Runnable, RunnableError};
///
/// struct Pump;
///
/// #[async_trait]
/// impl Runnable for Pump {
///     async fn run(&mut self, ctx: CancellationToken) -> Result<(), RunnableError> {
///         while !ctx.is_cancelled() {
///             // move one batch...
///             tokio::task::yield_now().await;
///             # break;
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Runnable: Send + 'static {
    /// Executes this attempt until completion, failure, or cancellation.
    async fn run(&mut self, ctx: CancellationToken) -> Result<(), RunnableError>;
}

/// Closure-backed [`Runnable`].
///
/// Wraps `F: FnMut(CancellationToken) -> Fut`. The runtime calls it once per
/// instance; pair it with [`FnDescriptor`](crate::FnDescriptor) to produce a
/// fresh closure environment per attempt.
pub struct RunnableFn<F> {
    f: F,
}

impl<F> RunnableFn<F> {
    /// Wraps a closure as a runnable.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> Runnable for RunnableFn<F>
where
    F: FnMut(CancellationToken) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), RunnableError>> + Send,
{
    async fn run(&mut self, ctx: CancellationToken) -> Result<(), RunnableError> {
        (self.f)(ctx).await
    }
}
