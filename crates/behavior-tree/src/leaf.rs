//! Condition leaves and the tracing decorator.

use crate::{Behavior, Node, Status};

/// Succeeds when the predicate holds for the context.
///
/// Conditions never fault and never mutate the context.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<C, E, F> Behavior<C, E> for Condition<F>
where
    F: Fn(&C) -> bool,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        Ok(Status::from_bool((self.check)(ctx)))
    }
}

/// Names a subtree in the trace output.
///
/// The child's result passes through unchanged; successes are logged at
/// `debug`, failures at `trace`.
pub struct Labeled<'n, C, E> {
    label: &'static str,
    child: Node<'n, C, E>,
}

impl<'n, C, E> Labeled<'n, C, E> {
    pub fn new(label: &'static str, child: Node<'n, C, E>) -> Self {
        Self { label, child }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C, E> Behavior<C, E> for Labeled<'_, C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        let status = self.child.tick(ctx)?;
        match status {
            Status::Success => tracing::debug!(node = self.label, "behavior succeeded"),
            Status::Failure => tracing::trace!(node = self.label, "behavior failed"),
        }
        Ok(status)
    }
}
