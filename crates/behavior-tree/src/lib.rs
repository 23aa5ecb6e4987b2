//! Fallible behavior tree primitives for turn-based decision ladders.
//!
//! Every tick completes immediately and either succeeds, fails, or raises a
//! fault of the caller's error type:
//!
//! - **No delta time**: evaluation is a pure function of the context
//! - **No Running state**: leaves succeed or fail within the tick
//! - **Faults short-circuit**: an `Err` from any node aborts the whole tree
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Leaves and decorators: [`Condition`], [`Labeled`]
//! - [`builder`]: boxed constructors for assembling trees inline

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use leaf::{Condition, Labeled};
pub use status::Status;
