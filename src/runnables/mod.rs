//! # Runnable abstractions.
//!
//! - [`Runnable`] — trait for a unit of work that runs until cancelled or
//!   until it fails; one instance exists per attempt.
//! - [`Descriptor`] — identity plus factory producing a fresh instance per
//!   attempt; referenced by the supervisor as [`DescriptorRef`].
//! - [`Registry`] — source of the current descriptor set, queried once per
//!   discovery cycle; [`StaticRegistry`] is the fixed-set implementation.
//! - [`RunnableFn`] / [`FnDescriptor`] — closure-backed adapters for tests
//!   and demos.

mod descriptor;
mod registry;
mod runnable;

pub use descriptor::{Descriptor, DescriptorRef, FnDescriptor};
pub use registry::{Registry, StaticRegistry};
pub use runnable::{Runnable, RunnableFn};
