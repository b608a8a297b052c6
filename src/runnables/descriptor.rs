//! # Descriptor: identity + per-attempt factory.
//!
//! A [`Descriptor`] names one registered unit of work and knows how to build a
//! fresh [`Runnable`] instance for a single attempt. The returned box is the
//! attempt's scope: it owns every resource of the attempt and releases them
//! when dropped at the end of the attempt.
//!
//! `begin` is fallible; a failed acquisition is reported and retried exactly
//! like a failed run.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::RunnableError;
use crate::runnables::Runnable;

/// Shared handle to a descriptor.
pub type DescriptorRef = Arc<dyn Descriptor>;

/// Identity plus factory for one registered unit of work.
///
/// Descriptors are supplied by a [`Registry`](crate::Registry) and referenced
/// by the supervisor; they are never consumed. `begin` is called immediately
/// before each attempt and must hand back an instance with no state shared
/// with any previous attempt.
pub trait Descriptor: Send + Sync + 'static {
    /// Stable, human-readable name; appears in events.
    fn name(&self) -> &str;

    /// Acquires a fresh attempt scope and constructs the instance inside it.
    fn begin(&self) -> Result<Box<dyn Runnable>, RunnableError>;
}

/// Closure-backed [`Descriptor`].
///
/// ## Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use runhost::{DescriptorRef, FnDescriptor, RunnableFn};
///
/// let d: DescriptorRef = FnDescriptor::arc("ticker", || {
///     Ok(Box::new(RunnableFn::new(|_ctx: CancellationToken| async move {
///         Ok(())
///     })) as _)
/// });
/// assert_eq!(d.name(), "ticker");
/// assert!(d.begin().is_ok());
/// ```
pub struct FnDescriptor<B> {
    name: Cow<'static, str>,
    begin: B,
}

impl<B> FnDescriptor<B>
where
    B: Fn() -> Result<Box<dyn Runnable>, RunnableError> + Send + Sync + 'static,
{
    /// Creates a descriptor from a name and a per-attempt factory closure.
    pub fn new(name: impl Into<Cow<'static, str>>, begin: B) -> Self {
        Self {
            name: name.into(),
            begin,
        }
    }

    /// Creates the descriptor and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, begin: B) -> DescriptorRef {
        Arc::new(Self::new(name, begin))
    }
}

impl<B> Descriptor for FnDescriptor<B>
where
    B: Fn() -> Result<Box<dyn Runnable>, RunnableError> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn begin(&self) -> Result<Box<dyn Runnable>, RunnableError> {
        (self.begin)()
    }
}
