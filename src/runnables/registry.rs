//! # Registry: source of the current descriptor set.
//!
//! The supervisor queries [`Registry::list`] once per discovery cycle and
//! treats the result as a snapshot, not a subscription. An empty snapshot puts
//! the supervisor into its poll loop; a non-empty one is effectively fixed for
//! the operational lifetime, because the spawned restart loops only return on
//! cancellation.
//!
//! `list` is infallible: an implementation backed by a fallible source should
//! contain the failure itself (return the previous snapshot, or empty).

use crate::runnables::DescriptorRef;

/// Enumerates the currently registered runnable descriptors.
pub trait Registry: Send + Sync + 'static {
    /// Returns a snapshot of the current descriptor set; may be empty.
    /// No ordering is guaranteed.
    fn list(&self) -> Vec<DescriptorRef>;
}

/// Fixed-set registry: returns the same descriptors on every query.
pub struct StaticRegistry {
    descriptors: Vec<DescriptorRef>,
}

impl StaticRegistry {
    /// Creates a registry over a fixed descriptor set.
    pub fn new(descriptors: Vec<DescriptorRef>) -> Self {
        Self { descriptors }
    }

    /// Registry with nothing registered; the supervisor will poll.
    pub fn empty() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }
}

impl Registry for StaticRegistry {
    fn list(&self) -> Vec<DescriptorRef> {
        self.descriptors.clone()
    }
}
